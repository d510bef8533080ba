pub mod config;
pub mod error;
pub mod generate;
pub mod io;
pub mod manifest;
pub mod paths;
pub mod render;
pub mod tokens;
pub mod validate;

pub use error::{Result, TokenError};

/// Starter token source written by `foundation init`. It satisfies the
/// default validation mappings.
pub const STARTER_TOKENS: &str = include_str!("../tokens/foundation.json");

//! Generation manifest: integrity digests, token counts and version metadata.
//!
//! Version metadata is best-effort. An unreadable schema-version file or
//! package manifest yields [`UNKNOWN`] and a warning; it never fails a run.

use crate::render::Artifacts;
use crate::tokens::TokenSource;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const UNKNOWN: &str = "unknown";
pub const MANIFEST_VERSION: &str = env!("CARGO_PKG_VERSION");
const SHORT_HASH_LEN: usize = 12;

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub version: String,
    pub schema_version: String,
    /// Version of the companion UI package that consumes the tokens.
    #[serde(rename = "appsSdkUiVersion")]
    pub package_version: String,
    pub token_count: TokenCount,
    /// Artifact key (`css`, `swift`, `colorsets`) -> lowercase hex SHA-256.
    pub sha256: BTreeMap<String, String>,
    pub generated: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    pub total: usize,
    pub colors: usize,
    pub spacing: usize,
    pub typography: usize,
    pub radius: usize,
    pub shadow: usize,
    pub size: usize,
}

impl TokenCount {
    pub fn of(tokens: &TokenSource) -> Self {
        let colors = tokens.colors.slot_count();
        let spacing = tokens.spacing.len();
        // Style keys plus the `fontFamily` key.
        let typography = tokens.typography.styles.len() + 1;
        let radius = tokens.radius.len();
        let shadow = tokens.shadow.len();
        let size = tokens.size.len();
        Self {
            total: colors + spacing + typography + radius + shadow + size,
            colors,
            spacing,
            typography,
            radius,
            shadow,
            size,
        }
    }
}

/// Where the two optional version strings come from.
#[derive(Debug, Clone, Default)]
pub struct MetadataSources {
    pub schema_version_file: Option<PathBuf>,
    pub package_manifest: Option<PathBuf>,
}

pub fn render_manifest(
    artifacts: &Artifacts,
    tokens: &TokenSource,
    sources: &MetadataSources,
    generated: DateTime<Utc>,
) -> Manifest {
    let mut sha256 = BTreeMap::new();
    sha256.insert("css".to_string(), sha256_hex(artifacts.css.as_bytes()));
    sha256.insert("swift".to_string(), sha256_hex(artifacts.swift.as_bytes()));
    sha256.insert("colorsets".to_string(), colorsets_digest(&artifacts.colorsets));

    Manifest {
        version: MANIFEST_VERSION.to_string(),
        schema_version: sources
            .schema_version_file
            .as_deref()
            .map(read_schema_version)
            .unwrap_or_else(|| UNKNOWN.to_string()),
        package_version: sources
            .package_manifest
            .as_deref()
            .map(read_package_version)
            .unwrap_or_else(|| UNKNOWN.to_string()),
        token_count: TokenCount::of(tokens),
        sha256,
        generated: generated.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

impl Manifest {
    pub fn to_json(&self) -> crate::Result<String> {
        let mut s = serde_json::to_string_pretty(self)?;
        s.push('\n');
        Ok(s)
    }
}

// ---------------------------------------------------------------------------
// Hashing
// ---------------------------------------------------------------------------

pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// One digest over every colorset, fed as `name NUL contents NUL` in name order.
pub fn colorsets_digest(colorsets: &BTreeMap<String, String>) -> String {
    let mut hasher = Sha256::new();
    for (name, contents) in colorsets {
        hasher.update(name.as_bytes());
        hasher.update([0u8]);
        hasher.update(contents.as_bytes());
        hasher.update([0u8]);
    }
    format!("{:x}", hasher.finalize())
}

pub fn short_hash(hex: &str) -> &str {
    hex.get(..SHORT_HASH_LEN).unwrap_or(hex)
}

// ---------------------------------------------------------------------------
// Soft metadata reads
// ---------------------------------------------------------------------------

pub fn read_schema_version(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(s) if !s.trim().is_empty() => s.trim().to_string(),
        Ok(_) => {
            tracing::warn!(path = %path.display(), "schema version file is empty");
            UNKNOWN.to_string()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read schema version");
            UNKNOWN.to_string()
        }
    }
}

pub fn read_package_version(path: &Path) -> String {
    #[derive(Deserialize)]
    struct Package {
        version: Option<String>,
    }

    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|s| serde_json::from_str::<Package>(&s).map_err(|e| e.to_string()));
    match parsed {
        Ok(Package {
            version: Some(v),
        }) if !v.trim().is_empty() => v,
        Ok(_) => {
            tracing::warn!(path = %path.display(), "package manifest has no version");
            UNKNOWN.to_string()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read package manifest");
            UNKNOWN.to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

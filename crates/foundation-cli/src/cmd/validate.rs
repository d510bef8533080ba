use crate::output::print_json;
use anyhow::Context;
use foundation_core::config::Config;
use foundation_core::validate::{self, strict_from_env};
use std::path::Path;

pub fn run(root: &Path, strict_flag: bool, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    config.ensure_valid().context("invalid config")?;

    let strict = strict_flag || config.validation.strict || strict_from_env();
    let report = validate::run(root, &config).context("failed to read platform artifacts")?;
    let failed = report.failed(strict);

    if json {
        print_json(&serde_json::json!({
            "ok": !failed,
            "strict": strict,
            "errors": report.errors,
            "warnings": report.warnings,
        }))?;
    } else {
        for e in &report.errors {
            println!("[error] {e}");
        }
        for w in &report.warnings {
            println!("[warning] {w}");
        }
        if !failed {
            println!(
                "Web and native tokens are consistent ({} warning(s)).",
                report.warnings.len()
            );
        }
    }

    if failed {
        anyhow::bail!(
            "validation failed: {} error(s), {} warning(s){}",
            report.errors.len(),
            report.warnings.len(),
            if strict { " in strict mode" } else { "" }
        );
    }
    Ok(())
}

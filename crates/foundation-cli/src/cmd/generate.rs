use crate::output::print_json;
use anyhow::Context;
use chrono::Utc;
use foundation_core::config::Config;
use foundation_core::generate;
use foundation_core::manifest::short_hash;
use std::path::Path;

pub fn run(root: &Path, tokens: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    config.ensure_valid().context("invalid config")?;

    let tokens_path = match tokens {
        Some(p) => p.to_path_buf(),
        None => root.join(&config.paths.tokens),
    };
    let report = generate::run_with_tokens(root, &config, &tokens_path, Utc::now())
        .with_context(|| format!("generation from {} failed", tokens_path.display()))?;

    if json {
        return print_json(&report.manifest);
    }

    for path in &report.outputs {
        let shown = path.strip_prefix(root).unwrap_or(path);
        println!("  wrote: {}", shown.display());
    }
    println!();
    for (artifact, digest) in &report.manifest.sha256 {
        println!("  {artifact:<10} {}", short_hash(digest));
    }
    println!(
        "\nGenerated {} tokens ({} colors).",
        report.manifest.token_count.total, report.manifest.token_count.colors
    );
    Ok(())
}

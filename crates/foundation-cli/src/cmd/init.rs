use crate::output::print_json;
use anyhow::Context;
use foundation_core::config::Config;
use foundation_core::io::write_if_missing;
use foundation_core::{paths, STARTER_TOKENS};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::default();
    let yaml = config.to_yaml().context("failed to serialize default config")?;

    let files = [
        (paths::CONFIG_FILE, yaml.as_str()),
        (paths::TOKENS_FILE, STARTER_TOKENS),
    ];
    let mut created = Vec::new();
    let mut existing = Vec::new();
    for (rel, contents) in files {
        let path = root.join(rel);
        let written = write_if_missing(&path, contents.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?;
        if written {
            created.push(rel);
        } else {
            existing.push(rel);
        }
    }

    if json {
        return print_json(&serde_json::json!({
            "root": root,
            "created": created,
            "existing": existing,
        }));
    }

    println!("Initializing foundation tokens in: {}", root.display());
    for rel in &created {
        println!("  created: {rel}");
    }
    for rel in &existing {
        println!("  exists:  {rel}");
    }
    println!("\nNext: foundation generate");
    Ok(())
}

//! Generation orchestration: render in memory, build the manifest, write.

use crate::config::{Config, PathsConfig};
use crate::error::Result;
use crate::io::atomic_write;
use crate::manifest::{render_manifest, Manifest, MetadataSources};
use crate::paths;
use crate::render::{self, catalog, Artifacts};
use crate::tokens::TokenSource;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Where each artifact lands. Paths are used as given.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputLayout {
    pub css: PathBuf,
    pub swift: PathBuf,
    pub catalog: PathBuf,
    pub manifest: PathBuf,
}

impl OutputLayout {
    /// Output paths from `paths`, joined onto `root`.
    pub fn under(root: &Path, paths: &PathsConfig) -> Self {
        let resolved = paths.resolve(root);
        Self {
            css: resolved.css,
            swift: resolved.swift,
            catalog: resolved.catalog,
            manifest: resolved.manifest,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// Every file written, in write order.
    pub outputs: Vec<PathBuf>,
    pub manifest: Manifest,
}

pub struct Generator {
    tokens: TokenSource,
}

impl Generator {
    pub fn new(tokens: TokenSource) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &TokenSource {
        &self.tokens
    }

    pub fn render(&self) -> Result<Artifacts> {
        render::render_all(&self.tokens)
    }

    /// Render everything, then write. A render failure leaves the layout
    /// untouched.
    pub fn generate(
        &self,
        layout: &OutputLayout,
        sources: &MetadataSources,
        generated: DateTime<Utc>,
    ) -> Result<GenerateReport> {
        let artifacts = self.render()?;
        let manifest = render_manifest(&artifacts, &self.tokens, sources, generated);
        let manifest_json = manifest.to_json()?;

        let mut outputs = Vec::with_capacity(artifacts.colorsets.len() + 4);

        atomic_write(&layout.css, artifacts.css.as_bytes())?;
        outputs.push(layout.css.clone());

        atomic_write(&layout.swift, artifacts.swift.as_bytes())?;
        outputs.push(layout.swift.clone());

        let catalog_contents = layout.catalog.join(paths::CONTENTS_JSON);
        atomic_write(&catalog_contents, catalog::catalog_root_contents().as_bytes())?;
        outputs.push(catalog_contents);
        for (name, contents) in &artifacts.colorsets {
            let path = paths::colorset_contents(&layout.catalog, name);
            atomic_write(&path, contents.as_bytes())?;
            outputs.push(path);
        }

        atomic_write(&layout.manifest, manifest_json.as_bytes())?;
        outputs.push(layout.manifest.clone());

        tracing::debug!(
            files = outputs.len(),
            colorsets = artifacts.colorsets.len(),
            "generation complete"
        );
        Ok(GenerateReport { outputs, manifest })
    }
}

/// Load the configured token file under `root` and generate every artifact.
pub fn run(root: &Path, config: &Config, generated: DateTime<Utc>) -> Result<GenerateReport> {
    run_with_tokens(root, config, &root.join(&config.paths.tokens), generated)
}

/// Like [`run`], reading tokens from `tokens_path` instead of the configured file.
pub fn run_with_tokens(
    root: &Path,
    config: &Config,
    tokens_path: &Path,
    generated: DateTime<Utc>,
) -> Result<GenerateReport> {
    tracing::debug!(tokens = %tokens_path.display(), "loading token source");
    let tokens = TokenSource::from_dtcg_file(tokens_path)?;
    let resolved = config.paths.resolve(root);
    let sources = MetadataSources {
        schema_version_file: Some(resolved.schema_version),
        package_manifest: Some(resolved.package_manifest),
    };
    Generator::new(tokens).generate(&OutputLayout::under(root, &config.paths), &sources, generated)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

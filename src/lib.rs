//! allocgen - build-time generator for the `GeneratedAllocations` contract.
//!
//! Reads a JSON object of allocation categories and writes a Solidity
//! contract whose constructor pushes one `LinearVesting` per entry.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod writer;

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

pub use config::Config;
pub use error::{AllocgenError, Result};
pub use model::{AllocationDataset, AllocationEntry, Category, GeneratedArtifact, Literal};
pub use parser::{DatasetLoader, JsonFileLoader};
pub use writer::{ArtifactWriter, FileWriter};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub categories: usize,
    pub allocations: usize,
    pub bytes: usize,
    pub output_path: PathBuf,
}

/// Load → render → write.
///
/// The writer is only reached once the whole contract has been rendered, so
/// a bad dataset never touches the output file.
pub fn generate(
    config: &Config,
    loader: &dyn DatasetLoader,
    writer: &dyn ArtifactWriter,
) -> Result<Summary> {
    // 1. ── Load ───────────────────────────────────────────────────────
    let dataset = loader.load(&config.input_path)?;
    info!("Total allocations found: {}", dataset.total_allocations());

    // 2. ── Render ─────────────────────────────────────────────────────
    let artifact = generator::render(&dataset)?;

    // 3. ── Write ──────────────────────────────────────────────────────
    writer.write(&config.output_path, &artifact)?;

    Ok(Summary {
        categories: dataset.categories.len(),
        allocations: artifact.allocations(),
        bytes: artifact.source().len(),
        output_path: config.output_path.clone(),
    })
}

/// Runs the generator against the real filesystem.
pub fn run(config: &Config) -> anyhow::Result<Summary> {
    let summary = generate(config, &JsonFileLoader, &FileWriter).with_context(|| {
        format!(
            "Generating {} from {}",
            config.output_path.display(),
            config.input_path.display()
        )
    })?;

    info!(
        "Wrote {} allocations in {} categories to {}",
        summary.allocations,
        summary.categories,
        summary.output_path.display()
    );
    Ok(summary)
}

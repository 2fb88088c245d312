//! Persist the rendered contract.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{AllocgenError, Result};
use crate::model::GeneratedArtifact;

/// Destination for a rendered artifact.
pub trait ArtifactWriter {
    fn write(&self, path: &Path, artifact: &GeneratedArtifact) -> Result<()>;
}

/// Writes the artifact to disk, replacing whatever is already there.
///
/// There is no temp-file dance: an interrupted write can leave a truncated
/// file, and re-running the generator is the fix.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileWriter;

impl ArtifactWriter for FileWriter {
    fn write(&self, path: &Path, artifact: &GeneratedArtifact) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AllocgenError::io(format!("creating {}", parent.display()), e)
            })?;
        }
        fs::write(path, artifact.source()).map_err(|e| AllocgenError::writing(path, e))?;
        debug!("Wrote {} bytes to {}", artifact.source().len(), path.display());
        Ok(())
    }
}

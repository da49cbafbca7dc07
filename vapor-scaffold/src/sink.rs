//! Writing generated files to disk

use crate::error::{Result, ScaffoldError};
use crate::scaffold::GeneratedFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Destination for generated files
pub trait FileSink {
    /// Write `content` at `path`, creating parent directories and replacing
    /// any existing file
    ///
    /// Returns the location actually written.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::WriteFailure`] if a directory or the file
    /// cannot be written.
    fn write(&self, path: &Path, content: &str) -> Result<PathBuf>;

    /// Write files in order, stopping at the first failure
    ///
    /// Files written before the failure stay on disk.
    ///
    /// # Errors
    ///
    /// Returns the first write failure.
    fn write_all(&self, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
        files
            .iter()
            .map(|file| self.write(&file.path, &file.content))
            .collect()
    }
}

/// Writes files beneath a root directory
///
/// Each file is written to a temporary sibling and renamed into place, so a
/// reader never observes a half-written file. New files get the same mode as
/// `fs::write` would give them; an overwritten file keeps its mode.
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    /// Create a sink rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory relative paths are joined onto
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Temporary file in `dir` carrying the permissions `target` should end up with
///
/// New files are requested with mode `0o666`, which the process umask narrows
/// just as it does for `fs::write`.
fn staging_file(dir: &Path, target: &Path) -> std::io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let temp = builder.tempfile_in(dir)?;

    if let Ok(existing) = fs::metadata(target) {
        temp.as_file().set_permissions(existing.permissions())?;
    }
    Ok(temp)
}

fn write_failure(path: &Path) -> impl FnOnce(std::io::Error) -> ScaffoldError + '_ {
    move |source| ScaffoldError::WriteFailure {
        path: path.to_path_buf(),
        source,
    }
}

impl FileSink for FsSink {
    fn write(&self, path: &Path, content: &str) -> Result<PathBuf> {
        let full_path = self.root.join(path);
        let parent = full_path
            .parent()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);

        fs::create_dir_all(&parent).map_err(write_failure(&parent))?;

        let mut temp = staging_file(&parent, &full_path).map_err(write_failure(&full_path))?;
        temp.write_all(content.as_bytes())
            .map_err(write_failure(&full_path))?;
        temp.persist(&full_path)
            .map_err(|err| write_failure(&full_path)(err.error))?;

        tracing::info!(path = %full_path.display(), bytes = content.len(), "wrote file");
        Ok(full_path)
    }
}

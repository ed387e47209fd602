use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Writes original and transformed fixtures into sibling corpus directories
pub struct CorpusWriter {
    normal_dir: PathBuf,
    backtick_dir: PathBuf,
}

impl CorpusWriter {
    /// Create a writer rooted at `root`; fixtures land in `root/normal`
    /// and `root/backtick`
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            normal_dir: root.join("normal"),
            backtick_dir: root.join("backtick"),
        }
    }

    pub fn normal_dir(&self) -> &Path {
        &self.normal_dir
    }

    pub fn backtick_dir(&self) -> &Path {
        &self.backtick_dir
    }

    /// Write both variants of one fixture, each prefixed with a provenance
    /// line naming the source URL
    pub fn write(
        &self,
        name: &str,
        source_url: &str,
        original: &str,
        transformed: &str,
    ) -> Result<()> {
        // Only the final path component is used; a search result can never
        // name a file outside the corpus directories.
        let file_name = Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::corpus(format!("unusable fixture name '{name}'")))?;

        fs::create_dir_all(&self.normal_dir)?;
        fs::create_dir_all(&self.backtick_dir)?;

        fs::write(self.normal_dir.join(file_name), fixture(source_url, original))?;
        fs::write(
            self.backtick_dir.join(file_name),
            fixture(source_url, transformed),
        )?;
        Ok(())
    }
}

/// A fixture body prefixed with its provenance line
fn fixture(source_url: &str, body: &str) -> String {
    format!("# source {source_url}\n{body}")
}

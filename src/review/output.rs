use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only list of accepted image paths, one per line. Opened once and
/// held for the whole session; every submit batch is flushed immediately.
#[derive(Debug)]
pub struct OutputSink {
    path: PathBuf,
    file: File,
}

impl OutputSink {
    pub fn open(path: &Path) -> Result<Self, String> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|error| format!("failed to open output file {:?}: {error}", path))?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append_paths(&mut self, paths: &[String]) -> Result<usize, String> {
        for path in paths {
            writeln!(self.file, "{path}")
                .map_err(|error| format!("failed to append to {:?}: {error}", self.path))?;
        }
        self.file
            .flush()
            .map_err(|error| format!("failed to flush {:?}: {error}", self.path))?;
        Ok(paths.len())
    }
}

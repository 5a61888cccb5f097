use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Payload persisted between sessions. `last_index` is the start offset of
/// the page that was on screen when the cache was last written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default)]
    pub last_index: usize,
}

/// One timestamped cache file per session, named
/// `.cache_<dataset_name>_<YYYYMMDD-HHMMSS>`. The newest file matching the
/// dataset name is read once at startup; this session's own file is rewritten
/// on every page turn.
#[derive(Debug, Clone)]
pub struct SessionCache {
    path: PathBuf,
    data: SessionData,
}

impl SessionCache {
    pub fn open(work_dir: &Path, dataset_name: &str) -> Result<Self, String> {
        let data = match find_latest(work_dir, dataset_name)? {
            Some(previous) => load(&previous)?,
            None => SessionData::default(),
        };

        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let path = work_dir.join(format!(".cache_{dataset_name}_{stamp}"));
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn last_index(&self) -> usize {
        self.data.last_index
    }

    pub fn store_last_index(&mut self, last_index: usize) -> Result<(), String> {
        self.data.last_index = last_index;
        let json = serde_json::to_string(&self.data)
            .map_err(|error| format!("failed to serialize session cache: {error}"))?;
        fs::write(&self.path, json)
            .map_err(|error| format!("failed to write session cache {:?}: {error}", self.path))
    }
}

pub fn find_latest(work_dir: &Path, dataset_name: &str) -> Result<Option<PathBuf>, String> {
    let entries = fs::read_dir(work_dir)
        .map_err(|error| format!("failed to read cache directory {:?}: {error}", work_dir))?;

    let mut candidates: Vec<String> = Vec::new();
    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy().to_string();
        if matches_cache_name(&name, dataset_name) {
            candidates.push(name);
        }
    }

    candidates.sort();
    Ok(candidates.pop().map(|name| work_dir.join(name)))
}

fn load(path: &Path) -> Result<SessionData, String> {
    let contents = fs::read_to_string(path)
        .map_err(|error| format!("failed to read session cache {:?}: {error}", path))?;
    serde_json::from_str(&contents)
        .map_err(|error| format!("failed to parse session cache {:?}: {error}", path))
}

/// Accepts exactly `.cache_<dataset_name>_` + 8 digits + `-` + 6 digits.
fn matches_cache_name(file_name: &str, dataset_name: &str) -> bool {
    let prefix = format!(".cache_{dataset_name}_");
    let Some(stamp) = file_name.strip_prefix(&prefix) else {
        return false;
    };

    let bytes = stamp.as_bytes();
    bytes.len() == 15
        && bytes[..8].iter().all(u8::is_ascii_digit)
        && bytes[8] == b'-'
        && bytes[9..].iter().all(u8::is_ascii_digit)
}

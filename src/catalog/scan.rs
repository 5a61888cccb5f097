use std::path::Path;

use walkdir::WalkDir;

#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub scanned_files: usize,
    pub supported_files: usize,
    pub paths: Vec<String>,
}

/// Collects the reviewable images directly inside `folder`, sorted by path so
/// a resumed page offset lands on the same images it described last session.
pub fn scan_images(folder: &str) -> Result<ScanReport, String> {
    let folder_path = Path::new(folder);
    if !folder_path.is_dir() {
        return Err(format!(
            "folder does not exist or is not a directory: {folder}"
        ));
    }

    let mut report = ScanReport::default();

    for entry in WalkDir::new(folder_path)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }

        report.scanned_files += 1;
        if !is_supported_image(entry.path()) {
            continue;
        }

        report.supported_files += 1;
        report.paths.push(entry.path().to_string_lossy().to_string());
    }

    report.paths.sort();
    Ok(report)
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ext == "jpg" || ext == "jpeg" || ext == "png"
        })
        .unwrap_or(false)
}

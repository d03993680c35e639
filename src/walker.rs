use crate::config::AppConfig;
use crate::error::AppError;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A `municipality/spot` directory and the image files found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotDirectory {
    pub municipality: String,
    pub spot: String,
    pub images: Vec<PathBuf>,
}

/// Walks `assets_directory/<municipality>/<spot>/<image>`.
///
/// Each level is listed in file-name order so sequence numbers assigned later
/// do not depend on the platform's directory enumeration order.
pub fn discover_spot_directories(config: &AppConfig) -> Result<Vec<SpotDirectory>, AppError> {
    log::info!("Starting image discovery in {}", config.assets_directory);
    log::debug!("Configured allowed extensions: {:?}", config.allowed_extensions);

    let mut spots = Vec::new();

    for municipality_entry in children(Path::new(&config.assets_directory)) {
        let municipality_entry = municipality_entry?;
        let Some(municipality) = directory_name(&municipality_entry) else {
            continue;
        };
        if config.skip_directories.contains(municipality) {
            log::debug!("Skipping excluded directory: {:?}", municipality_entry.path());
            continue;
        }

        for spot_entry in children(municipality_entry.path()) {
            let spot_entry = spot_entry?;
            let Some(spot) = directory_name(&spot_entry) else {
                continue;
            };

            let images = collect_images(config, spot_entry.path())?;
            log::debug!(
                "Found {} images in {:?}",
                images.len(),
                spot_entry.path()
            );
            spots.push(SpotDirectory {
                municipality: municipality.to_string(),
                spot: spot.to_string(),
                images,
            });
        }
    }

    log::info!("Image discovery complete: {} spot directories.", spots.len());
    Ok(spots)
}

fn collect_images(config: &AppConfig, spot_dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut images = Vec::new();
    for entry in children(spot_dir) {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            log::trace!("Skipping non-file entry: {:?}", path);
            continue;
        }
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if config.allowed_extensions.contains(&ext.to_lowercase()) => {
                log::trace!("Discovered image: {:?}", path);
                images.push(path.to_path_buf());
            }
            Some(_) => log::trace!("Skipping file due to unsupported extension: {:?}", path),
            None => log::trace!("Skipping file with no extension: {:?}", path),
        }
    }
    Ok(images)
}

fn children(dir: &Path) -> walkdir::IntoIter {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
}

/// The entry's name when it is a directory with a UTF-8 name.
fn directory_name(entry: &DirEntry) -> Option<&str> {
    if !entry.file_type().is_dir() {
        log::trace!("Skipping non-directory entry: {:?}", entry.path());
        return None;
    }
    let name = entry.file_name().to_str();
    if name.is_none() {
        log::warn!("Skipping directory with non UTF-8 name: {:?}", entry.path());
    }
    name
}

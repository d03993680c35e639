use crate::config::AppConfig;
use crate::error::AppError;
use crate::metadata::MigratedImages;
use crate::slug::slugify;
use crate::walker::SpotDirectory;
use std::fs::{self, File, FileTimes};
use std::path::Path;

/// Manifest key for a municipality directory: spaces become underscores, then uppercase.
pub fn municipality_key(dir_name: &str) -> String {
    dir_name.replace(' ', "_").to_uppercase()
}

/// Manifest key for a spot directory: underscores become spaces.
pub fn spot_key(dir_name: &str) -> String {
    dir_name.replace('_', " ")
}

/// `{municipality}_{spot}_{NN}.{ext}` with both names slugified and the
/// extension kept as found on disk.
pub fn flat_file_name(municipality_key: &str, spot_key: &str, sequence: usize, ext: &str) -> String {
    format!(
        "{}_{}_{:02}.{}",
        slugify(municipality_key),
        slugify(spot_key),
        sequence,
        ext
    )
}

/// Copies every discovered image into the flat output directory.
///
/// Spots without images are left out of the result. Any copy failure aborts
/// the run; files copied before it stay in place.
pub fn migrate_images(
    config: &AppConfig,
    spot_dirs: &[SpotDirectory],
) -> Result<MigratedImages, AppError> {
    let output_dir = Path::new(&config.output_directory);
    fs::create_dir_all(output_dir)?;
    log::info!("Migrating images into {:?}", output_dir);

    let mut migrated = MigratedImages::new();

    for spot_dir in spot_dirs {
        let municipality = municipality_key(&spot_dir.municipality);
        let spot = spot_key(&spot_dir.spot);

        let mut spot_images = Vec::with_capacity(spot_dir.images.len());
        for source in &spot_dir.images {
            let Some(ext) = source.extension().and_then(|s| s.to_str()) else {
                continue;
            };
            let file_name = flat_file_name(&municipality, &spot, spot_images.len() + 1, ext);
            let target = output_dir.join(&file_name);

            copy_preserving_times(source, &target)?;
            println!("Copied: {} -> {}", source.display(), target.display());
            log::debug!("Copied {:?} as {}", source, file_name);
            spot_images.push(file_name);
        }

        if spot_images.is_empty() {
            log::debug!("No images for {} / {}; leaving it out", municipality, spot);
            continue;
        }
        migrated
            .entry(municipality)
            .or_default()
            .insert(spot, spot_images);
    }

    Ok(migrated)
}

fn copy_preserving_times(from: &Path, to: &Path) -> Result<(), AppError> {
    let copy_error = |source| AppError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(from).map_err(copy_error)?;
    fs::copy(from, to).map_err(copy_error)?;

    let mut times = FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    let restored = File::options()
        .write(true)
        .open(to)
        .and_then(|file| file.set_times(times));
    if let Err(e) = restored {
        log::warn!("Could not preserve timestamps on {:?}: {}", to, e);
    }
    Ok(())
}

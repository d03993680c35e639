use crate::config::AppConfig;
use crate::error::AppError;
use crate::metadata::{MunicipalitySpots, SpotCatalog, SpotEntry};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

const GEOJSON_EXTENSION: &str = "geojson";

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: FeatureProperties,
}

#[derive(Debug, Deserialize)]
struct FeatureProperties {
    name: String,
    #[serde(default)]
    categories: Option<Vec<String>>,
}

/// Reads every `*.geojson` file in the configured directory into a catalog
/// keyed by the uppercased file stem.
pub fn load_spots(config: &AppConfig) -> Result<SpotCatalog, AppError> {
    log::info!("Loading tourist spots from {}", config.geojson_directory);

    let mut catalog = SpotCatalog::new();

    for entry in WalkDir::new(&config.geojson_directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 && is_not_found(&e) => {
                log::warn!(
                    "GeoJSON directory {} does not exist; no spots loaded",
                    config.geojson_directory
                );
                return Ok(catalog);
            }
            Err(e) => return Err(e.into()),
        };
        let path = entry.path();
        if !entry.file_type().is_file() {
            log::trace!("Skipping non-file entry: {:?}", path);
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some(GEOJSON_EXTENSION) {
            log::trace!("Skipping non-GeoJSON file: {:?}", path);
            continue;
        }
        let Some(municipality) = path.file_stem().and_then(|s| s.to_str()) else {
            log::trace!("Skipping file with unreadable name: {:?}", path);
            continue;
        };
        let municipality = municipality.to_uppercase();

        let spots = load_municipality(path)?;
        log::debug!("Loaded {} spots for {} from {:?}", spots.len(), municipality, path);
        if catalog.insert(municipality.clone(), spots).is_some() {
            log::debug!("{} was already loaded; {:?} replaces it", municipality, path);
        }
    }

    Ok(catalog)
}

fn is_not_found(error: &walkdir::Error) -> bool {
    error
        .io_error()
        .map_or(false, |io| io.kind() == io::ErrorKind::NotFound)
}

fn load_municipality(path: &Path) -> Result<MunicipalitySpots, AppError> {
    let raw = fs::read_to_string(path)?;
    let collection: FeatureCollection =
        serde_json::from_str(&raw).map_err(|source| AppError::Geojson {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(collection
        .features
        .into_iter()
        .map(|feature| {
            let props = feature.properties;
            (
                props.name,
                SpotEntry::with_categories(props.categories.unwrap_or_default()),
            )
        })
        .collect())
}

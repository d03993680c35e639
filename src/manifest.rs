use crate::config::AppConfig;
use crate::error::AppError;
use crate::metadata::{MigratedImages, SpotCatalog};
use crate::slug::slugify;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub version: String,
    pub last_updated: String,
    pub description: String,
    pub spots: SpotCatalog,
}

/// Builds the manifest from the GeoJSON catalog, filling in migrated images.
///
/// The catalog decides which spots exist; image folders without a matching
/// spot are not represented.
pub fn generate_manifest(
    config: &AppConfig,
    catalog: &SpotCatalog,
    migrated: &MigratedImages,
) -> Manifest {
    let by_slug: IndexMap<(String, String), &Vec<String>> = if config.match_by_slug {
        migrated
            .iter()
            .flat_map(|(municipality, spots)| {
                spots
                    .iter()
                    .map(move |(spot, images)| ((slugify(municipality), slugify(spot)), images))
            })
            .collect()
    } else {
        IndexMap::new()
    };

    let mut spots = catalog.clone();
    for (municipality, municipality_spots) in spots.iter_mut() {
        for (spot, entry) in municipality_spots.iter_mut() {
            let images = if config.match_by_slug {
                by_slug.get(&(slugify(municipality), slugify(spot))).copied()
            } else {
                migrated.get(municipality).and_then(|m| m.get(spot))
            };
            match images {
                Some(images) => entry.set_images(images.clone()),
                None => log::debug!("No images for {} / {}", municipality, spot),
            }
        }
    }

    Manifest {
        version: config.manifest_version.clone(),
        last_updated: config.last_updated.clone(),
        description: config.description.clone(),
        spots,
    }
}

/// Writes `manifest` as two-space indented JSON, creating parent directories.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(path, json)?;
    log::info!("Manifest saved to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use crate::metadata::SpotEntry;
    use tempfile::TempDir;

    fn catalog() -> SpotCatalog {
        let mut virac = IndexMap::new();
        virac.insert(
            "Binurong Viewdeck".to_string(),
            SpotEntry::with_categories(vec!["viewpoint".into(), "hiking".into()]),
        );
        virac.insert(
            "Virac Cathedral".to_string(),
            SpotEntry::with_categories(vec!["church".into()]),
        );
        let mut catalog = SpotCatalog::new();
        catalog.insert("VIRAC".to_string(), virac);
        catalog.insert("BATO".to_string(), IndexMap::new());
        catalog
    }

    fn migrated() -> MigratedImages {
        let mut virac = IndexMap::new();
        virac.insert(
            "Binurong Viewdeck".to_string(),
            vec![
                "virac_binurong-viewdeck_01.jpg".to_string(),
                "virac_binurong-viewdeck_02.PNG".to_string(),
            ],
        );
        virac.insert(
            "Unlisted Cove".to_string(),
            vec!["virac_unlisted-cove_01.jpg".to_string()],
        );
        let mut migrated = MigratedImages::new();
        migrated.insert("VIRAC".to_string(), virac);
        migrated
    }

    #[test]
    fn merges_images_into_catalog_spots() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        let manifest = generate_manifest(&config, &catalog(), &migrated());

        assert_eq!(manifest.version, "1.0.0");
        assert_eq!(manifest.last_updated, "2026-01-03T14:41:00Z");
        let virac = &manifest.spots["VIRAC"];
        let viewdeck = &virac["Binurong Viewdeck"];
        assert_eq!(viewdeck.images.len(), 2);
        assert_eq!(
            viewdeck.thumbnail.as_deref(),
            Some("virac_binurong-viewdeck_01.jpg")
        );
        assert_eq!(viewdeck.categories, ["viewpoint", "hiking"]);

        let cathedral = &virac["Virac Cathedral"];
        assert!(cathedral.images.is_empty());
        assert_eq!(cathedral.thumbnail, None);
        assert_eq!(cathedral.categories, ["church"]);

        assert!(!virac.contains_key("Unlisted Cove"));
        assert!(manifest.spots["BATO"].is_empty());
    }

    #[test]
    fn exact_matching_misses_case_variants() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        let mut migrated = MigratedImages::new();
        migrated.entry("VIRAC".to_string()).or_default().insert(
            "binurong viewdeck".to_string(),
            vec!["virac_binurong-viewdeck_01.jpg".to_string()],
        );

        let exact = generate_manifest(&config, &catalog(), &migrated);
        assert!(exact.spots["VIRAC"]["Binurong Viewdeck"].images.is_empty());

        config.match_by_slug = true;
        let by_slug = generate_manifest(&config, &catalog(), &migrated);
        assert_eq!(
            by_slug.spots["VIRAC"]["Binurong Viewdeck"].thumbnail.as_deref(),
            Some("virac_binurong-viewdeck_01.jpg")
        );
    }

    #[test]
    fn writes_pretty_json_with_literal_unicode() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        let mut catalog = SpotCatalog::new();
        catalog
            .entry("BARAS".to_string())
            .or_default()
            .insert("Pu\u{f1}ta Sur".to_string(), SpotEntry::default());
        let manifest = generate_manifest(&config, &catalog, &MigratedImages::new());

        let path = Path::new(&config.manifest_path);
        write_manifest(path, &manifest).unwrap();

        let written = fs::read_to_string(path).unwrap();
        assert!(written.starts_with("{\n  \"version\": \"1.0.0\",\n  \"lastUpdated\""));
        assert!(written.contains("\"Pu\u{f1}ta Sur\""));
        assert!(written.contains("\"thumbnail\": null"));
        assert!(written.contains("\"images\": []"));
        assert!(!written.ends_with('\n'));

        let parsed: Manifest = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, manifest);
    }
}

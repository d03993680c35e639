// src/metadata.rs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One tourist spot as it appears in the manifest.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct SpotEntry {
    pub images: Vec<String>,
    pub thumbnail: Option<String>,
    pub categories: Vec<String>,
}

impl SpotEntry {
    pub fn with_categories(categories: Vec<String>) -> Self {
        Self {
            categories,
            ..Self::default()
        }
    }

    /// Replaces the image list; the thumbnail always follows the first image.
    pub fn set_images(&mut self, images: Vec<String>) {
        self.thumbnail = images.first().cloned();
        self.images = images;
    }
}

/// Spot name to entry, in feature order.
pub type MunicipalitySpots = IndexMap<String, SpotEntry>;

/// Municipality name (uppercased GeoJSON stem) to its spots.
pub type SpotCatalog = IndexMap<String, MunicipalitySpots>;

/// Municipality key to spot key to the migrated filenames, in copy order.
pub type MigratedImages = IndexMap<String, IndexMap<String, Vec<String>>>;

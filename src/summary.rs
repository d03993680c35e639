use crate::manifest::Manifest;
use crate::metadata::{MigratedImages, SpotCatalog};
use std::fmt;

/// Counts printed at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub municipalities: usize,
    pub spots: usize,
    pub spots_with_images: usize,
    pub images: usize,
}

impl Summary {
    /// `spots_with_images` counts every migrated spot folder, including ones
    /// the manifest dropped for lack of a GeoJSON entry.
    pub fn collect(catalog: &SpotCatalog, migrated: &MigratedImages, manifest: &Manifest) -> Self {
        Self {
            municipalities: manifest.spots.len(),
            spots: total_spots(catalog),
            spots_with_images: migrated.values().map(|spots| spots.len()).sum(),
            images: total_images(migrated),
        }
    }
}

pub fn total_spots(catalog: &SpotCatalog) -> usize {
    catalog.values().map(|spots| spots.len()).sum()
}

pub fn total_images(migrated: &MigratedImages) -> usize {
    migrated
        .values()
        .flat_map(|spots| spots.values())
        .map(|images| images.len())
        .sum()
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "      Total municipalities: {}", self.municipalities)?;
        writeln!(f, "      Total tourist spots: {}", self.spots)?;
        writeln!(f, "      Spots with images: {}", self.spots_with_images)?;
        write!(f, "      Total images: {}", self.images)
    }
}

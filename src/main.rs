mod cli;
mod config;
mod error;
mod geojson;
mod manifest;
mod metadata;
mod migrator;
mod slug;
mod summary;
mod walker;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::summary::{total_images, total_spots, Summary};
use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::new(&cli)?;

    env_logger::Builder::new()
        .filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    info!("Starting spot_migrator");

    let rule = "=".repeat(60);
    println!("{}", rule);
    println!("Image Structure Migration Tool");
    println!("{}", rule);
    println!();

    println!("[1/4] Loading tourist spots from GeoJSON files...");
    let catalog = geojson::load_spots(&config)?;
    println!(
        "      Loaded {} spots from {} municipalities",
        total_spots(&catalog),
        catalog.len()
    );
    println!();

    println!("[2/4] Migrating images to flat structure...");
    let spot_dirs = walker::discover_spot_directories(&config)?;
    let migrated = migrator::migrate_images(&config, &spot_dirs)?;
    println!("      Migrated {} images", total_images(&migrated));
    println!();

    println!("[3/4] Generating manifest.json...");
    let manifest = manifest::generate_manifest(&config, &catalog, &migrated);
    let manifest_path = Path::new(&config.manifest_path);
    manifest::write_manifest(manifest_path, &manifest)?;
    println!("      Manifest saved to: {}", manifest_path.display());
    println!();

    println!("[4/4] Migration Summary:");
    println!("{}", Summary::collect(&catalog, &migrated, &manifest));
    println!();
    println!("\u{2713} Migration completed successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Review the migrated images in: {}", config.output_directory);
    println!("  2. Remove the old nested folders under: {}", config.assets_directory);

    info!("spot_migrator finished");

    Ok(())
}

use crate::cli::Cli;
use crate::error::AppError;
use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::collections::HashSet;

pub const DEFAULT_GEOJSON_DIRECTORY: &str = "public/data";
pub const DEFAULT_ASSETS_DIRECTORY: &str = "src/assets";
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "public/assets/images";
pub const DEFAULT_MANIFEST_PATH: &str = "public/assets/images/manifest.json";
pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];
pub const DEFAULT_SKIP_DIRECTORIES: [&str; 1] = ["images"];
pub const DEFAULT_MANIFEST_VERSION: &str = "1.0.0";
pub const DEFAULT_LAST_UPDATED: &str = "2026-01-03T14:41:00Z";
pub const DEFAULT_DESCRIPTION: &str = "Image manifest for HapiHub tourist spots in Catanduanes";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub geojson_directory: String,
    pub assets_directory: String,
    pub output_directory: String,
    pub manifest_path: String,
    pub allowed_extensions: HashSet<String>,
    pub skip_directories: HashSet<String>,
    pub manifest_version: String,
    pub last_updated: String,
    pub description: String,
    pub match_by_slug: bool,
    pub log_level: String,
}

impl AppConfig {
    pub fn new(cli: &Cli) -> Result<Self, AppError> {
        let env = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let skip_dirs = (!cli.skip_dirs.is_empty()).then(|| cli.skip_dirs.clone());

        let s = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(File::with_name("config/local").required(false))
            .set_override_option("geojson_directory", cli.geojson_dir.clone())?
            .set_override_option("assets_directory", cli.assets_dir.clone())?
            .set_override_option("output_directory", cli.output_dir.clone())?
            .set_override_option("manifest_path", cli.manifest.clone())?
            .set_override_option("last_updated", cli.last_updated.clone())?
            .set_override_option("match_by_slug", cli.match_by_slug.then_some(true))?
            .set_override_option("skip_directories", skip_dirs)?
            .set_override_option("log_level", cli.log_level.clone())?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("geojson_directory", DEFAULT_GEOJSON_DIRECTORY)?
            .set_default("assets_directory", DEFAULT_ASSETS_DIRECTORY)?
            .set_default("output_directory", DEFAULT_OUTPUT_DIRECTORY)?
            .set_default("manifest_path", DEFAULT_MANIFEST_PATH)?
            .set_default("allowed_extensions", DEFAULT_ALLOWED_EXTENSIONS.to_vec())?
            .set_default("skip_directories", DEFAULT_SKIP_DIRECTORIES.to_vec())?
            .set_default("manifest_version", DEFAULT_MANIFEST_VERSION)?
            .set_default("last_updated", DEFAULT_LAST_UPDATED)?
            .set_default("description", DEFAULT_DESCRIPTION)?
            .set_default("match_by_slug", false)?
            .set_default("log_level", "info")
    }
}

/// Config rooted under `root` with every other field at its compiled default.
#[cfg(test)]
pub fn test_config(root: &std::path::Path) -> AppConfig {
    let path = |p: &str| root.join(p).to_string_lossy().to_string();
    AppConfig {
        geojson_directory: path(DEFAULT_GEOJSON_DIRECTORY),
        assets_directory: path(DEFAULT_ASSETS_DIRECTORY),
        output_directory: path(DEFAULT_OUTPUT_DIRECTORY),
        manifest_path: path(DEFAULT_MANIFEST_PATH),
        allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        skip_directories: DEFAULT_SKIP_DIRECTORIES.iter().map(|s| s.to_string()).collect(),
        manifest_version: DEFAULT_MANIFEST_VERSION.into(),
        last_updated: DEFAULT_LAST_UPDATED.into(),
        description: DEFAULT_DESCRIPTION.into(),
        match_by_slug: false,
        log_level: "info".into(),
    }
}

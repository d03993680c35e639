use clap::Parser;

/// Flattens the nested spot image tree and writes the image manifest.
///
/// Every flag is optional; without any the tool runs against the default
/// relative paths.
#[derive(Parser, Debug, Default)]
#[command(name = "spot_migrator", version, about)]
pub struct Cli {
    #[arg(long, help = "Directory holding the per-municipality .geojson files")]
    pub geojson_dir: Option<String>,

    #[arg(long, help = "Root of the nested municipality/spot image tree")]
    pub assets_dir: Option<String>,

    #[arg(long, help = "Flat directory the renamed images are copied into")]
    pub output_dir: Option<String>,

    #[arg(long, help = "Path of the generated manifest.json")]
    pub manifest: Option<String>,

    #[arg(long, help = "Value written to the manifest's lastUpdated field")]
    pub last_updated: Option<String>,

    #[arg(long, help = "Match spots to image folders by slug instead of exact name")]
    pub match_by_slug: bool,

    #[arg(long = "skip-dir", help = "Municipality-level directory to ignore (repeatable)")]
    pub skip_dirs: Vec<String>,

    #[arg(long, help = "Log filter level (error, warn, info, debug, trace)")]
    pub log_level: Option<String>,
}

use atlas::core::config::{self, CliOverrides};
use atlas::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "atlas", about = "Browse the countries of the world from your terminal")]
struct Args {
    /// Countries endpoint (overrides config and ATLAS_COUNTRIES_URL)
    #[arg(short, long)]
    url: Option<String>,

    /// Path to open at startup, e.g. /countries or /BEL
    #[arg(short, long)]
    open: Option<String>,

    /// Start in dark mode unless a saved preference exists
    #[arg(long, conflicts_with = "light")]
    dark: bool,

    /// Start in light mode unless a saved preference exists
    #[arg(long)]
    light: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        let dark_mode = match (self.dark, self.light) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        CliOverrides {
            url: self.url.clone(),
            open: self.open.clone(),
            dark_mode,
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to atlas.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("atlas.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{}, falling back to defaults", e);
            eprintln!("atlas: {e}, falling back to defaults");
            config::AtlasConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, &args.overrides());

    log::info!("Atlas starting up with source: {}", resolved.countries_url);

    tui::run(resolved)
}

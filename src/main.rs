use clap::Parser;
use huemix::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "huemix", about = "Two-player color mixing game for the terminal")]
struct Args {
    /// Number of red tiles
    #[arg(long)]
    left: Option<usize>,

    /// Number of blue tiles
    #[arg(long)]
    right: Option<usize>,

    /// Seed for reproducible reference colors
    #[arg(long)]
    seed: Option<u64>,

    /// Play without sound cues
    #[arg(long)]
    mute: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to huemix.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("huemix.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Huemix starting up");

    let cli = CliOverrides {
        left_count: args.left,
        right_count: args.right,
        seed: args.seed,
        mute: args.mute,
    };
    let resolved = config::load_config()
        .and_then(|file_config| config::resolve(&file_config, &cli))
        .map_err(|e| {
            log::error!("{}", e);
            eprintln!("huemix: {e}");
            std::io::Error::other(e)
        })?;

    huemix::tui::run(resolved)
}

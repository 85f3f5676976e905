use anyhow::Context;
use clap::Parser;

use stripegen::{GeneratorConfig, run_with_config};

#[derive(Parser)]
#[command(name = "stripegen")]
#[command(about = "Generate a striped placeholder image with a timestamp and caption")]
struct Cli {
    /// File type to output (jpg or png)
    #[arg(short = 't', long = "type", default_value = "jpg")]
    file_type: String,

    /// Path to output file to
    #[arg(short, long, default_value = "out.jpg")]
    output: String,

    /// Seed the stripe colors for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Caption words, joined with spaces
    #[arg(value_name = "TITLE")]
    title: Vec<String>,
}

fn main() {
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config =
        GeneratorConfig::new(&args.file_type, &args.output, args.title).with_seed(args.seed);

    match run_with_config(&config).context("stripegen failed") {
        Ok(path) => log::info!("Done: {}", path.display()),
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

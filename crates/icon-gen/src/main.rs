use std::path::PathBuf;
use std::process;

use clap::Parser;
use icon_gen::commands::generate;
use icon_gen_core::{DEFAULT_TARGETS, OUTPUT_ROOT};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "icon-gen")]
#[command(about = "Generate platform-specific icons from 1024x1024 images")]
#[command(version)]
struct Cli {
    /// Path to input image(s) (1024x1024 pixels)
    #[arg(value_name = "IMAGE", required = true)]
    images: Vec<PathBuf>,

    /// Target platforms: w=Windows, m=macOS, l=Linux
    #[arg(short, long, default_value = DEFAULT_TARGETS)]
    target: String,

    /// Root directory for generated icons
    #[arg(short, long, default_value = OUTPUT_ROOT)]
    output: PathBuf,

    /// Log resize and encode details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = generate::run(&cli.images, &cli.target, &cli.output);
    match &result {
        Ok(report) if report.success() => {
            println!("\nIcon generation completed successfully.");
        }
        Ok(_) => {
            println!("\nIcon generation completed with errors.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
        }
    }

    process::exit(generate::exit_code(&result));
}

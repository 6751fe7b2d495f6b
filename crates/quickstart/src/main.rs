use std::env;
use std::process;

use clap::Parser;
use quickstart::{Bootstrap, default_python, usage_instructions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quickstart")]
#[command(about = "Create a Python virtual environment and install dependencies")]
#[command(version)]
struct Cli {
    /// Python interpreter used to create the virtual environment
    #[arg(long, default_value = default_python())]
    python: String,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let project_dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: cannot determine current directory: {}", e);
            process::exit(1);
        }
    };

    println!("\n=== Setting up Python virtual environment ===\n");

    match Bootstrap::new(project_dir, cli.python).run() {
        Ok(()) => {
            println!("\n=== Setup Complete ===");
            println!("{}", usage_instructions());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

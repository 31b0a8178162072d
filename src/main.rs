use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use git_semver::{config, resolver, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-semver",
    about = "Derive semantic version strings from git describe output"
)]
struct Args {
    #[arg(
        short = 'C',
        long,
        help = "Repository directory (defaults to the current directory)"
    )]
    workdir: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Output format: standard, dirty, full or all")]
    format: Option<String>,

    #[arg(long, help = "Print status messages while deriving the version")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-semver {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // CLI flags override file values
    let format = args.format.unwrap_or(config.output.format);
    let verbose = args.verbose || config.output.verbose;

    if verbose {
        match &args.workdir {
            Some(dir) => ui::display_status(&format!("Deriving version in {}", dir.display())),
            None => ui::display_status("Deriving version in current directory"),
        }
    }

    let triple = match resolver::resolve_version(args.workdir.as_deref()) {
        Ok(triple) => triple,
        Err(e) => {
            ui::display_error(&format!("Failed to derive version: {}", e));
            std::process::exit(1);
        }
    };

    let rendered = match ui::format_versions(&triple, &format) {
        Ok(rendered) => rendered,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    println!("{}", rendered);

    if verbose {
        ui::display_success(&format!("Derived version {}", triple.full));
    }

    Ok(())
}

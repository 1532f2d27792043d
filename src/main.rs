use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use assembly_bump::cli::{run_bump_workflow, BumpWorkflowArgs};
use assembly_bump::{config, logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "assembly-bump",
    about = "Increment the assembly version declared in a source file"
)]
struct Args {
    #[arg(help = "Component to bump: build, update, minor or major (default: build)")]
    kind: Option<String>,

    #[arg(short, long, help = "File to rewrite (default: src/SharedAssemblyInfo.cs)")]
    file: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Print the new version without rewriting the file")]
    dry_run: bool,

    #[arg(long, help = "Log every rewritten declaration")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("assembly-bump {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    logging::init(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config =
        config::load_config(args.config.as_deref()).context("Error loading config")?;

    let result = run_bump_workflow(
        BumpWorkflowArgs {
            kind: args.kind,
            file: args.file,
            dry_run: args.dry_run,
        },
        &config,
    )?;

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }

    if args.dry_run {
        ui::display_status(&format!(
            "Dry run: {} bump of {} (file not written)",
            result.kind,
            result.path.display()
        ));
        ui::display_declarations(&result.outcome.declarations);
    } else if !result.outcome.declarations.is_empty() {
        ui::display_success(&format!(
            "Bumped {} to {}",
            result.path.display(),
            result.version()
        ));
    }

    ui::print_version(result.version());
    Ok(())
}

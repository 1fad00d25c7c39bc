use anyhow::Result;
use clap::{Parser, Subcommand};
use skillpack::validate::{has_errors, validate_package};
use skillpack::{scaffold, SkillIndex};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "skillpack",
    about = "Scaffold and validate agent skill packages",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new skill package skeleton
    Init {
        /// Skill name (lowercase letters, digits, and hyphens)
        name: String,
        /// Parent directory to create the package under
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },
    /// Validate an existing skill package
    Validate {
        /// Path to the package directory
        path: PathBuf,
        /// Emit findings as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the skill packages under a directory
    List {
        /// Directory containing skill package subdirectories
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { name, path } => {
            let root = scaffold::create_package(&name, &path)?;
            println!("created skill package at {}", root.display());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { path, json } => {
            let findings = validate_package(&path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&findings)?);
            } else if findings.is_empty() {
                println!("{}: ok", path.display());
            } else {
                for finding in &findings {
                    println!("{finding}");
                }
            }
            if has_errors(&findings) {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        Commands::List { dir } => {
            let index = SkillIndex::build(&dir)?;
            if index.count() == 0 && index.scan_errors().is_empty() {
                println!("no skill packages found under {}", dir.display());
            } else {
                println!("{}", index.render());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

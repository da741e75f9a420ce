use clap::Parser;
use modroot::config::cli::Command;
use modroot::utils::error::ErrorSeverity;
use modroot::utils::logger;
use modroot::{CliConfig, Locator, LookupReport, Result};
use std::path::{Path, PathBuf};

fn main() {
    let cli = CliConfig::parse();

    if cli.json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok(report) => print_report(&cli, &report),
        Err(e) => {
            tracing::error!(severity = ?e.severity(), "{}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 1,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 3,
            };
            std::process::exit(exit_code);
        }
    }
}

fn run(cli: &CliConfig) -> Result<LookupReport> {
    let locator = Locator::new(cli.locator_config()?);
    let marker = locator.config().marker_file.as_str();
    let mut report = LookupReport::default();

    match &cli.command {
        Command::Root { from } => {
            let from = absolute_or_cwd(from.as_deref())?;
            let root = if from.is_dir() {
                locator.find_root_from_dir(marker, &from)?
            } else {
                locator.find_root_dir(marker, &from)?
            };
            report.root = Some(root);
        }
        Command::Module { root } => {
            let root = match root {
                Some(root) => root.clone(),
                None => locator.find_root_from_dir(marker, &absolute_or_cwd(None)?)?,
            };
            report.module = Some(locator.read_module_identity(&root)?);
            report.root = Some(root);
        }
        Command::Rel { root, path } => {
            report.relative = Some(locator.relative_package_path(root, path)?);
        }
    }

    Ok(report)
}

fn absolute_or_cwd(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(std::path::absolute(path)?),
        None => Ok(std::env::current_dir()?),
    }
}

fn print_report(cli: &CliConfig, report: &LookupReport) {
    if cli.json {
        match serde_json::to_string(report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("❌ failed to serialize output: {}", e);
                std::process::exit(3);
            }
        }
        return;
    }

    let line = match &cli.command {
        Command::Root { .. } => report.root.as_ref().map(|p| p.display().to_string()),
        Command::Module { .. } => report.module.clone(),
        Command::Rel { .. } => report.relative.as_ref().map(|p| p.display().to_string()),
    };
    if let Some(line) = line {
        println!("{}", line);
    }
}

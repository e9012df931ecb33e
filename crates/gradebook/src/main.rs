//! `gradebook` - CLI for the student records demonstration
//!
//! With no subcommand the binary runs the demonstration and prints each step.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

use gradebook::cli::{Cli, Command, ConfigCommand, ExportCommand, SearchCommand, SearchField};
use gradebook::{demo, init_logging, Config, StudentRecords};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => handle_demo(&config),
        Command::Export(export_cmd) => handle_export(&config, &export_cmd),
        Command::Search(search_cmd) => handle_search(&config, &search_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_demo(config: &Config) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut StudentRecords::new(), config, &mut out)
        .context("running demonstration")?;
    out.flush()?;
    Ok(())
}

fn handle_export(config: &Config, cmd: &ExportCommand) -> anyhow::Result<()> {
    let records = demo::final_records(config)?;
    let pretty = config.report.pretty_json && !cmd.compact;
    println!("{}", records.to_json(pretty)?);
    Ok(())
}

fn handle_search(config: &Config, cmd: &SearchCommand) -> anyhow::Result<()> {
    let records = demo::final_records(config)?;
    match cmd.by {
        SearchField::Id => println!("{}", records.search_student(&cmd.query)),
        SearchField::Name => {
            for line in records.search_by_name(&cmd.query) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Report]");
                println!("  GPA precision:      {}", config.report.gpa_precision);
                println!("  Pretty JSON:        {}", config.report.pretty_json);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

//! Command-line front end for the numerology dashboard core.
//!
//! # Responsibility
//! - Parse user commands and forward them to core services.
//! - Render reports to a document file and print remedy lists.

mod render;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use log::info;
use numerology_core::{
    daily_insight, init_logging, open_store, parse_remedy_number, set_user_logo, start, AppConfig,
    GridType, RemedyService, ReportService, SqliteRemedyRepository,
};
use std::path::PathBuf;

/// Numerology dashboard: grids, remedies and reports.
#[derive(Parser, Debug)]
#[command(name = "numerology")]
#[command(version)]
#[command(about = "Numerology grids, remedies and reports", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Settings file (JSON); defaults apply when absent
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Data directory holding the remedy store, backups and logo
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute grids and write a report document
    Report {
        /// Full name
        #[arg(short, long)]
        name: String,

        /// Date of birth, e.g. DDMMYYYY
        #[arg(short, long)]
        dob: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the report document as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show today's lucky number and color
    Daily {
        /// Date of birth, e.g. DDMMYYYY
        #[arg(short, long)]
        dob: String,
    },

    /// Manage custom remedies
    Remedy {
        #[command(subcommand)]
        action: RemedyCommands,
    },

    /// Manage the report logo
    Logo {
        #[command(subcommand)]
        action: LogoCommands,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum RemedyCommands {
    /// Add a remedy for a number and grid
    Add {
        /// Number 1-9
        number: String,

        /// Grid type (LoShu|Vedic)
        #[arg(short, long, default_value = "LoShu")]
        grid: String,

        /// Category label
        #[arg(long, default_value = "")]
        category: String,

        /// Remedy / prediction text
        text: String,
    },

    /// List all remedies
    List,

    /// Replace the text of a remedy
    Edit {
        id: i64,
        text: String,
    },

    /// Delete a remedy
    Delete {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
enum LogoCommands {
    /// Copy an image (png/jpg/jpeg) as the user logo
    Set { path: PathBuf },

    /// Print the logo currently in use
    Show,
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Write the effective configuration to a file
    Generate {
        #[arg(short, long, default_value = "numerology.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let log_dir = absolute(config.log_dir())?;
    if let Err(err) = init_logging(level, &log_dir) {
        eprintln!("logging disabled: {err}");
    }

    match cli.command {
        Commands::Report {
            name,
            dob,
            output,
            json,
        } => run_report(&config, &name, &dob, output, json),
        Commands::Daily { dob } => run_daily(&dob),
        Commands::Remedy { action } => run_remedy(&config, action),
        Commands::Logo { action } => run_logo(&config, action),
        Commands::Config { action } => run_config(&config, action),
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    Ok(config)
}

fn absolute(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().context("current directory unavailable")?;
    Ok(cwd.join(path))
}

fn run_report(
    config: &AppConfig,
    name: &str,
    dob: &str,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let started = start(config, Local::now().naive_local())?;
    let remedies = RemedyService::new(SqliteRemedyRepository::new(&started.conn));
    let report = ReportService::new(&remedies).build(name, dob)?;

    let document = if json {
        serde_json::to_string_pretty(&report)? + "\n"
    } else {
        let generated_on = Local::now().format("%d-%m-%Y %H:%M").to_string();
        render::render_text(&report, &generated_on)?
    };

    let json_on_stdout = json && output.is_none();
    match output {
        Some(path) => {
            std::fs::write(&path, document)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            info!("event=report_export module=cli status=ok json={json}");
            println!("Report saved to {}", path.display());
        }
        None => print!("{document}"),
    }

    if let Some(insight) = daily_insight(dob, Local::now().date_naive()) {
        let line = format!(
            "Today's Lucky Number: {}\nLucky Color: {}",
            insight.lucky_number, insight.lucky_color
        );
        // Stdout carries only the JSON document.
        if json_on_stdout {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
    Ok(())
}

fn run_daily(dob: &str) -> Result<()> {
    match daily_insight(dob, Local::now().date_naive()) {
        Some(insight) => {
            println!("Today's Lucky Number: {}", insight.lucky_number);
            println!("Lucky Color: {}", insight.lucky_color);
            Ok(())
        }
        None => bail!("enter a date of birth"),
    }
}

fn run_remedy(config: &AppConfig, action: RemedyCommands) -> Result<()> {
    let conn = match action {
        RemedyCommands::List => open_store(config)?,
        _ => start(config, Local::now().naive_local())?.conn,
    };
    let service = RemedyService::new(SqliteRemedyRepository::new(&conn));

    match action {
        RemedyCommands::Add {
            number,
            grid,
            category,
            text,
        } => {
            let number = parse_remedy_number(&number)?;
            let grid_type = GridType::parse(&grid)?;
            let id = service.create(number, grid_type, &category, &text)?;
            println!("Remedy added (ID:{id})");
        }
        RemedyCommands::List => {
            for record in service.list_all()? {
                let preview: String = record.text.chars().take(30).collect();
                println!(
                    "ID:{} | Num:{} | {} | {} | {}...",
                    record.id, record.number, record.grid_type, record.category, preview
                );
            }
        }
        RemedyCommands::Edit { id, text } => {
            service.update_text(id, &text)?;
            println!("Remedy {id} updated");
        }
        RemedyCommands::Delete { id } => {
            service.delete(id)?;
            println!("Remedy {id} deleted");
        }
    }
    Ok(())
}

fn run_logo(config: &AppConfig, action: LogoCommands) -> Result<()> {
    match action {
        LogoCommands::Set { path } => {
            let target = set_user_logo(config, &path)?;
            println!("Logo updated: {}", target.display());
        }
        LogoCommands::Show => match config.active_logo_path() {
            Some(path) => println!("{}", path.display()),
            None => println!("No logo configured"),
        },
    }
    Ok(())
}

fn run_config(config: &AppConfig, action: ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Show => println!("{}", serde_json::to_string_pretty(config)?),
        ConfigCommands::Generate { output } => {
            config.save(&output)?;
            println!("Configuration written to {}", output.display());
        }
    }
    Ok(())
}

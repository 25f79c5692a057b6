//! docgen - legal document generator CLI
//!
//! Usage:
//!   docgen categories
//!   docgen fields <CATEGORY>
//!   docgen render <CATEGORY> [--values FILE] [--set KEY=VALUE]...
//!   docgen export <CATEGORY> --format pdf|doc [--values FILE] [--set KEY=VALUE]... [--out DIR]

mod commands;
mod config;
mod output;

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use editor_core::ExportFormat;
use template_engine::TemplateCatalog;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{parse_assignment, ExportOptions};
use config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "docgen")]
#[command(version, about = "Generate legal documents from category templates")]
struct Cli {
    /// Config file (defaults to ./docgen.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Template catalog in TOML format (defaults to the built-in templates)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List document categories
    Categories,

    /// Show the form fields of a category and the keys they submit under
    Fields { category: String },

    /// Print the rendered document
    Render {
        category: String,
        #[command(flatten)]
        input: ValueArgs,
    },

    /// Render and save the document as PDF or DOC
    Export {
        category: String,
        #[command(flatten)]
        input: ValueArgs,

        /// Output format: pdf or doc
        #[arg(short, long, default_value = "pdf")]
        format: ExportFormat,

        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ValueArgs {
    /// JSON object of field values keyed by normalized field name
    #[arg(long)]
    values: Option<PathBuf>,

    /// Set one field, by label or key (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    set: Vec<(String, String)>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Documents go to stdout, so logs must stay on stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cwd = std::env::current_dir()?;
    let config = CliConfig::load(cli.config.as_deref(), &cwd)?;

    let catalog = match cli.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => TemplateCatalog::from_file(path)?,
        None => TemplateCatalog::builtin(),
    };

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Categories => commands::list_categories(&catalog, &mut stdout)?,
        Command::Fields { category } => commands::list_fields(&catalog, &category, &mut stdout)?,
        Command::Render { category, input } => {
            let values =
                commands::collect_values(catalog.get(&category), input.values.as_deref(), &input.set)?;
            commands::render(&catalog, &category, values.as_ref(), &mut stdout)?;
        }
        Command::Export {
            category,
            input,
            format,
            out,
        } => {
            let values =
                commands::collect_values(catalog.get(&category), input.values.as_deref(), &input.set)?;
            let output_dir = out.unwrap_or_else(|| config.output_dir());
            let path = commands::export(
                &catalog,
                &category,
                values.as_ref(),
                ExportOptions {
                    format,
                    output_dir: &output_dir,
                    file_stem: config.file_stem(),
                },
            )?;
            writeln!(stdout, "{}", path.display())?;
        }
    }

    Ok(())
}

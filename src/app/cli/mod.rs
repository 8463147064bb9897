//! CLI Adapter.

use clap::{Parser, Subcommand, ValueEnum};

use crate::app::api::{self, AddOutcome, InitOptions, InitOutcome, SourceSummary};
use crate::app::logging::init_logging;
use crate::domain::{AppError, SourceKind};

#[derive(Parser)]
#[command(name = "reuseit")]
#[command(version)]
#[command(about = "Add Re-use-it! components and snippets to your project", long_about = None)]
struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize custom Tailwind styles for your project
    #[clap(visible_alias = "i")]
    Init {
        /// Overwrite the Tailwind v4 stylesheet without asking
        #[arg(short, long)]
        yes: bool,
    },
    /// Add a Re-use-it! component to your project
    #[clap(visible_alias = "a")]
    Add {
        /// Component name (case-insensitive)
        component: String,
    },
    /// Add a Re-use-it! snippet to your project
    AddSnippet {
        /// Snippet name (case-insensitive)
        snippet: String,
    },
    /// List available components and snippets
    #[clap(visible_alias = "ls")]
    List {
        /// Restrict the listing to one kind
        #[arg(value_enum)]
        kind: Option<ListKind>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ListKind {
    Components,
    Snippets,
}

impl From<ListKind> for SourceKind {
    fn from(value: ListKind) -> Self {
        match value {
            ListKind::Components => SourceKind::Component,
            ListKind::Snippets => SourceKind::Snippet,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { yes } => run_init(yes),
        Commands::Add { component } => run_add(SourceKind::Component, &component),
        Commands::AddSnippet { snippet } => run_add(SourceKind::Snippet, &snippet),
        Commands::List { kind } => {
            run_list(kind.map(SourceKind::from));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_init(yes: bool) -> Result<(), AppError> {
    let outcome = api::init(InitOptions { assume_yes: yes })?;
    println!("Detected Tailwind CSS version: {}", outcome.version());

    match outcome {
        InitOutcome::V3 { config_path, stylesheet_path, stylesheet_appended, .. } => {
            println!("✅ Tailwind configuration updated in {}", config_path);
            if stylesheet_appended {
                println!("✅ Added base styles to {}", stylesheet_path);
            } else {
                println!("Base styles already present in {}", stylesheet_path);
            }
        }
        InitOutcome::V4 { framework, stylesheet_path, .. } => {
            match framework {
                Some(framework) => println!("Detected {} project", framework),
                None => println!("Framework not recognized, defaulting to {}", stylesheet_path),
            }
            println!("✅ Custom styles for Tailwind v4 written to {}", stylesheet_path);
        }
        InitOutcome::Declined { .. } => {
            println!("Action canceled. No changes were made.");
        }
        InitOutcome::Unsupported { version } => {
            println!("⚠️  Unsupported Tailwind version detected ({}). No changes were made.", version);
        }
    }
    Ok(())
}

fn run_add(kind: SourceKind, name: &str) -> Result<(), AppError> {
    let AddOutcome { file_name, destination, .. } = match kind {
        SourceKind::Component => api::add_component(name)?,
        SourceKind::Snippet => api::add_snippet(name)?,
    };
    println!("✅ {} successfully added to the project at {}", file_name, destination);
    Ok(())
}

fn run_list(kind: Option<SourceKind>) {
    let summaries = api::list_sources(kind);
    for group in SourceKind::ALL {
        let entries: Vec<&SourceSummary> = summaries.iter().filter(|s| s.kind == group).collect();
        if entries.is_empty() {
            continue;
        }

        let heading = match group {
            SourceKind::Component => "Components",
            SourceKind::Snippet => "Snippets",
        };
        println!("{}:", heading);
        let width = entries.iter().map(|s| s.name.len()).max().unwrap_or(0);
        for entry in entries {
            println!("  {:<width$}  {}", entry.name, entry.file_name, width = width);
        }
    }
}

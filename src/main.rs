use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use jobtrack::{FilterField, FilterState, SortMode};

mod cmd;

#[derive(Parser)]
#[command(name = "jobtrack")]
#[command(version, about = "Job notification tracker")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub project_dir: Option<PathBuf>,

    /// Job dataset (JSON array). Overrides jobtrack.toml and JOBTRACK_JOBS.
    #[arg(long, global = true)]
    pub jobs: Option<PathBuf>,

    /// Storage file for saved jobs. Overrides jobtrack.toml and JOBTRACK_STORAGE.
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Also write logs to .jobtrack/logs
    #[arg(long, global = true)]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter bar values shared by commands that list jobs.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive match on title or company
    #[arg(long)]
    pub keyword: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub mode: Option<String>,

    #[arg(long)]
    pub experience: Option<String>,

    #[arg(long)]
    pub source: Option<String>,

    /// Sort order: latest, featured
    #[arg(long, default_value = "latest")]
    pub sort: SortMode,
}

impl FilterArgs {
    pub fn to_filter(&self) -> FilterState {
        let mut filter = FilterState::default().with_sort(self.sort);
        let fields = [
            (FilterField::Keyword, &self.keyword),
            (FilterField::Location, &self.location),
            (FilterField::Mode, &self.mode),
            (FilterField::Experience, &self.experience),
            (FilterField::Source, &self.source),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                filter.set(field, value.clone());
            }
        }
        filter
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a route's markup
    Render {
        /// Route path, e.g. /saved (defaults to the dashboard)
        route: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Emit a standalone HTML document instead of the page body
        #[arg(long)]
        document: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open the written document in the browser
        #[arg(long)]
        open: bool,
    },
    /// List jobs matching the filters
    Jobs {
        #[command(flatten)]
        filters: FilterArgs,

        /// Only saved jobs
        #[arg(long)]
        saved: bool,
    },
    /// Show a single job
    Show {
        id: u64,

        /// Print the detail modal markup
        #[arg(long)]
        html: bool,
    },
    /// Toggle a job's saved state
    Save { id: u64 },
    /// List saved jobs
    Saved,
    /// Print the route table
    Routes,
    /// Apply a JSON-lines script of UI events and print the final page
    Replay {
        /// Script file, one event object per line
        file: PathBuf,

        /// Keep saved jobs in memory instead of the storage file
        #[arg(long)]
        ephemeral: bool,

        /// Emit a standalone HTML document instead of the page body
        #[arg(long)]
        document: bool,
    },
    /// Browse jobs interactively
    Session,
    /// View or validate configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Validate configuration and show any warnings
    Validate,
    /// Initialize a default jobtrack.toml file
    Init,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let project_dir = match cli.project_dir.clone() {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    let log_options = jobtrack::logging::LogOptions {
        verbose: cli.verbose,
        json: cli.log_json,
        log_dir: cli
            .log_file
            .then(|| jobtrack::config::get_tracker_dir(&project_dir).join("logs")),
    };
    let _log_guard = jobtrack::logging::init(&log_options)?;

    match &cli.command {
        Commands::Render {
            route,
            filters,
            document,
            output,
            open,
        } => cmd::cmd_render(
            &project_dir,
            &cli,
            route.as_deref(),
            filters,
            *document,
            output.as_deref(),
            *open,
        )?,
        Commands::Jobs { filters, saved } => cmd::cmd_jobs(&project_dir, &cli, filters, *saved)?,
        Commands::Show { id, html } => cmd::cmd_show(&project_dir, &cli, *id, *html)?,
        Commands::Save { id } => cmd::cmd_save(&project_dir, &cli, *id)?,
        Commands::Saved => cmd::cmd_saved(&project_dir, &cli)?,
        Commands::Routes => cmd::cmd_routes(),
        Commands::Replay {
            file,
            ephemeral,
            document,
        } => cmd::cmd_replay(&project_dir, &cli, file, *ephemeral, *document)?,
        Commands::Session => cmd::cmd_session(&project_dir, &cli)?,
        Commands::Config { command } => cmd::cmd_config(&project_dir, &cli, command.clone())?,
    }

    Ok(())
}

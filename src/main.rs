use std::path::PathBuf;

use clap::{Parser, Subcommand};
use geomon::{AppError, InitOptions};

#[derive(Parser)]
#[command(name = "geomon")]
#[command(version)]
#[command(
    about = "Bootstrap the GeoMonitor suite environment and launch processing sessions",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the suite environment, create user directories, print a summary
    #[clap(visible_alias = "i")]
    Init {
        /// Append the environment block to the shell profile
        #[arg(long)]
        persist: bool,
        /// Leave the command aliases out of the persisted block
        #[arg(long)]
        no_aliases: bool,
        /// Profile to persist into (default: $HOME/.bashrc)
        #[arg(long, requires = "persist")]
        profile: Option<PathBuf>,
        /// Do not ask for confirmation before writing the profile
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Print the environment block for eval in the current shell
    Shellenv {
        /// Leave the command aliases out of the output
        #[arg(long)]
        no_aliases: bool,
    },
    /// Manage the active project
    #[clap(visible_alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Launch a processing-engine session
    #[clap(visible_alias = "r")]
    Run {
        /// Four-digit processing year
        year: String,
        /// Four-character session code (e.g. 0010)
        session: String,
        /// Use the mock engine instead of the external installation
        #[arg(long)]
        mock: bool,
    },
}

#[derive(Subcommand)]
enum ProjectCommands {
    /// Activate a project and create its output directories
    Use {
        /// Project name
        name: String,
    },
    /// Print the active project name
    Current,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { persist, no_aliases, profile, yes } => geomon::init(InitOptions {
            persist,
            no_aliases,
            profile,
            assume_yes: yes,
        }),
        Commands::Shellenv { no_aliases } => geomon::shellenv(no_aliases),
        Commands::Project { command } => match command {
            ProjectCommands::Use { name } => geomon::project_use(&name),
            ProjectCommands::Current => geomon::project_current(),
        },
        Commands::Run { year, session, mock } => geomon::run(&year, &session, mock),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

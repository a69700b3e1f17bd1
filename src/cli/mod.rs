pub mod context;
pub mod output;
pub mod participant_commands;

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::db::ParticipantStore;
use crate::error::{RosterError, RosterResult};
use crate::model::{BuddyGroup, Status};
use crate::ops::ParticipantKey;
use context::CLIContext;

/// Iron Pulse - cohort roster administration.
#[derive(Debug, Parser)]
#[command(name = "iron-pulse", version)]
pub struct Cli {
    /// Roster data file
    #[arg(short, long, global = true, env = "IRON_PULSE_FILE", default_value = "iron_lady_data.csv")]
    pub file: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the dashboard: metrics and the full roster
    List {
        #[arg(long, value_parser = parse_group)]
        group: Option<BuddyGroup>,
        #[arg(long, value_parser = parse_status)]
        status: Option<Status>,
        /// Print the rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Register a new participant
    Add {
        name: String,
        #[arg(short, long, value_parser = parse_group)]
        group: BuddyGroup,
        #[arg(long, default_value = "")]
        goal: String,
    },
    /// Change a participant's milestone status
    Update {
        #[command(flatten)]
        target: Target,
        #[arg(short, long, value_parser = parse_status)]
        status: Status,
    },
    /// Permanently remove a participant
    Archive {
        #[command(flatten)]
        target: Target,
    },
    /// Show full details for participants matching a name
    Show { query: String },
    /// List participants whose name contains the query
    Find { query: String },
    /// Show cohort metrics
    Stats,
    /// Interactive session (the default)
    Shell,
}

/// Name or ID of the participant(s) to act on.
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).args(["name", "id"])))]
pub struct Target {
    /// Exact participant name; every row with this name is affected
    pub name: Option<String>,
    /// Participant ID instead of name
    #[arg(long)]
    pub id: Option<u32>,
}

impl Target {
    pub fn key(&self) -> RosterResult<ParticipantKey> {
        match (&self.name, self.id) {
            (_, Some(id)) => Ok(ParticipantKey::Id(id)),
            (Some(name), None) => Ok(ParticipantKey::Name(name.clone())),
            (None, None) => Err(RosterError::BlankField { field: "name".into() }),
        }
    }
}

fn parse_group(s: &str) -> Result<BuddyGroup, String> {
    s.parse().map_err(|e: RosterError| e.to_string())
}

fn parse_status(s: &str) -> Result<Status, String> {
    s.parse().map_err(|e: RosterError| e.to_string())
}

impl Cli {
    pub fn execute(self) -> RosterResult<()> {
        let ctx = CLIContext::new(ParticipantStore::new(self.file));
        match self.command.unwrap_or(Commands::Shell) {
            Commands::List { group, status, json } => {
                participant_commands::list(&ctx, group, status, json)
            }
            Commands::Add { name, group, goal } => participant_commands::add(&ctx, &name, group, &goal),
            Commands::Update { target, status } => {
                participant_commands::update(&ctx, &target.key()?, status)
            }
            Commands::Archive { target } => participant_commands::archive(&ctx, &target.key()?),
            Commands::Show { query } => participant_commands::show(&ctx, &query),
            Commands::Find { query } => participant_commands::find(&ctx, &query),
            Commands::Stats => participant_commands::stats(&ctx),
            Commands::Shell => {
                run(&ctx);
                Ok(())
            }
        }
    }
}

/// Run the interactive REPL.
pub fn run(ctx: &CLIContext) {
    println!("Iron Pulse: Internal Ops");
    println!("Data file: {}", ctx.store.path().display());
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    // Surface a broken data file up front instead of on the first command.
    if let Err(e) = participant_commands::stats(ctx) {
        ctx.print_error(&e);
    }
    println!();

    repl_loop(ctx);
}

fn repl_loop(ctx: &CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        let result = match command {
            "help" | "?" => {
                print_help();
                Ok(())
            }
            "quit" | "exit" | "q" => break,

            "dashboard" | "list" | "ls" => participant_commands::list(ctx, None, None, false),
            "add" => participant_commands::add_interactive(ctx, args),
            "update" => participant_commands::update_interactive(ctx, args),
            "archive" => participant_commands::archive_interactive(ctx, args),
            "show" | "view" => participant_commands::show(ctx, args),
            "find" => participant_commands::find(ctx, args),
            "stats" => participant_commands::stats(ctx),

            _ => {
                println!("Unknown command: {}. Type 'help' for commands.", command);
                Ok(())
            }
        };

        if let Err(e) = result {
            ctx.print_error(&e);
        }
    }
}

/// Split input into command and the remaining arguments.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find([' ', '\t']) {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  dashboard / list        Show metrics and the full roster
  add [name]              Register a new participant
  update [name]           Change a participant's status
  archive [name]          Permanently remove a participant
  show <name>             Show participant details
  find <query>            Search participants by name
  stats                   Show cohort metrics
  help                    Show this help
  exit / quit / q         Exit

TIPS:
  - Names are case-insensitive and partial matches work
  - Update and archive affect every participant sharing the chosen name"#);
}

use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use turndown_types::{Role, RoomId, SessionKind, TaskId};

#[derive(Parser)]
#[command(name = "turndown")]
#[command(about = "Track housekeeping cleanings and supervisor spot checks", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "~/.turndown", global = true)]
    pub data_dir: String,

    #[arg(long, default_value = "plain", global = true, overrides_with = "format")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory and seed the default room/task catalog
    Init,

    /// Log in as a user with a declared role
    Login {
        user_id: String,

        #[arg(long)]
        role: Role,
    },

    /// End the current login session
    Logout,

    /// Show who is logged in
    Whoami,

    Room {
        #[command(subcommand)]
        command: RoomCommand,
    },

    Task {
        #[command(subcommand)]
        command: TaskCommand,
    },

    Clean {
        #[command(subcommand)]
        command: CleanCommand,
    },

    Spotcheck {
        #[command(subcommand)]
        command: SpotCheckCommand,
    },

    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum RoomCommand {
    /// List catalog rooms in the configured locale
    List,
}

#[derive(Subcommand)]
pub enum TaskCommand {
    /// List catalog tasks in the configured locale
    List,
}

#[derive(Subcommand)]
pub enum CleanCommand {
    /// Start cleaning a room (staff only, counts against the daily quota)
    Start { room: RoomId },

    /// Mark a task completed in the room's active cleaning
    Task { room: RoomId, task: TaskId },

    /// Finish the room's active cleaning
    Finish { room: RoomId },
}

#[derive(Subcommand)]
pub enum SpotCheckCommand {
    /// Start a spot check on a room cleaned today (supervisor only)
    Start { room: RoomId },

    /// Submit the room's active spot check with notes
    Submit {
        room: RoomId,

        #[arg(long)]
        notes: String,
    },
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Show the most recent session of a kind for a room
    Latest { kind: SessionKind, room: RoomId },

    /// Show the latest cleaning and spot check state for a room
    Status { room: RoomId },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Set a configuration value (owner only)
    Set { key: String, value: String },
}

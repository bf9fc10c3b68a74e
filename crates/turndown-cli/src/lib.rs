mod args;
mod commands;
mod handlers;
pub mod identity;
pub mod output;
pub mod types;

pub use args::{
    Cli, CleanCommand, Commands, ConfigCommand, RoomCommand, SessionCommand, SpotCheckCommand,
    TaskCommand,
};
pub use commands::run;

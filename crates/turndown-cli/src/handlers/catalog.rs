use crate::args::{RoomCommand, TaskCommand};
use crate::commands::AppContext;
use crate::types::OutputFormat;
use anyhow::Result;

pub fn handle_room(ctx: &AppContext, command: RoomCommand, format: &OutputFormat) -> Result<()> {
    match command {
        RoomCommand::List => {
            let rooms = ctx.db.list_rooms()?;

            if format.is_json() {
                println!("{}", serde_json::to_string_pretty(&rooms)?);
                return Ok(());
            }

            if rooms.is_empty() {
                println!("No rooms in the catalog. Run 'turndown init' to seed it.");
                return Ok(());
            }

            let locale = &ctx.config.default_locale;
            println!("{:<10} NAME", "ROOM");
            for room in &rooms {
                println!("{:<10} {}", room.id, room.display_name(locale));
            }
            Ok(())
        }
    }
}

pub fn handle_task(ctx: &AppContext, command: TaskCommand, format: &OutputFormat) -> Result<()> {
    match command {
        TaskCommand::List => {
            let tasks = ctx.db.list_tasks()?;

            if format.is_json() {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
                return Ok(());
            }

            if tasks.is_empty() {
                println!("No tasks in the catalog. Run 'turndown init' to seed it.");
                return Ok(());
            }

            let locale = &ctx.config.default_locale;
            println!("{:<20} {:<10} NAME", "TASK", "REQUIRED");
            for task in &tasks {
                println!(
                    "{:<20} {:<10} {}",
                    task.id,
                    if task.required { "yes" } else { "no" },
                    task.display_name(locale)
                );
            }
            Ok(())
        }
    }
}

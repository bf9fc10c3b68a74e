use crate::args::CleanCommand;
use crate::commands::AppContext;
use crate::output;
use crate::types::OutputFormat;
use anyhow::Result;
use turndown_core::{ShiftController, StoreCatalog, SystemClock};
use turndown_types::CleaningSession;

pub fn handle(ctx: &AppContext, command: CleanCommand, format: &OutputFormat) -> Result<()> {
    let catalog = StoreCatalog::new(&ctx.db);
    let clock = SystemClock;
    let mut controller = ShiftController::new(
        &ctx.db,
        &ctx.identity,
        &catalog,
        &clock,
        ctx.config.quota_tracking,
    );
    if !format.is_json() {
        controller.subscribe(output::event_line);
    }

    match command {
        CleanCommand::Start { room } => {
            let session = controller.start_cleaning(&room)?;
            print_session(&session, format)
        }
        CleanCommand::Task { room, task } => {
            let session = controller.complete_task(&room, &task)?;
            print_session(&session, format)
        }
        CleanCommand::Finish { room } => {
            let session = controller.complete_cleaning(&room)?;
            print_session(&session, format)
        }
    }
}

fn print_session(session: &CleaningSession, format: &OutputFormat) -> Result<()> {
    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(session)?);
        return Ok(());
    }

    println!(
        "Cleaning #{} room {} by {} [{}]",
        session.id,
        session.room_id,
        session.staff_id,
        output::status_display(session.status)
    );
    println!("Started  {}", output::format_time(session.started_at));
    if let Some(ended_at) = session.ended_at {
        println!("Finished {}", output::format_time(ended_at));
    }
    if !session.tasks.is_empty() {
        println!("Tasks:");
        for completion in &session.tasks {
            println!("{}", output::task_line(completion));
        }
    }
    Ok(())
}

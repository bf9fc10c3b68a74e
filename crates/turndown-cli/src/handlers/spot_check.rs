use crate::args::SpotCheckCommand;
use crate::commands::AppContext;
use crate::output;
use crate::types::OutputFormat;
use anyhow::Result;
use turndown_core::{ShiftController, StoreCatalog, SystemClock};
use turndown_types::SpotCheckSession;

pub fn handle(ctx: &AppContext, command: SpotCheckCommand, format: &OutputFormat) -> Result<()> {
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
        SpotCheckCommand::Start { room } => {
            let session = controller.start_spot_check(&room)?;
            print_session(&session, format)
        }
        SpotCheckCommand::Submit { room, notes } => {
            let session = controller.submit_spot_check(&room, &notes)?;
            print_session(&session, format)
        }
    }
}

fn print_session(session: &SpotCheckSession, format: &OutputFormat) -> Result<()> {
    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(session)?);
        return Ok(());
    }

    println!(
        "Spot check #{} room {} by {} [{}]",
        session.id,
        session.room_id,
        session.supervisor_id,
        output::status_display(session.status)
    );
    println!("Started  {}", output::format_time(session.started_at));
    if let Some(ended_at) = session.ended_at {
        println!("Finished {}", output::format_time(ended_at));
    }
    if let Some(notes) = &session.notes {
        println!("Notes: {}", notes);
    }
    Ok(())
}

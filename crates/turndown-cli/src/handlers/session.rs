use crate::args::SessionCommand;
use crate::commands::AppContext;
use crate::output;
use crate::types::OutputFormat;
use anyhow::Result;
use turndown_types::{SessionKind, SessionRecord};

pub fn handle(ctx: &AppContext, command: SessionCommand, format: &OutputFormat) -> Result<()> {
    match command {
        SessionCommand::Latest { kind, room } => {
            let record = ctx.db.latest_by_room(kind, &room)?;

            if format.is_json() {
                println!("{}", serde_json::to_string_pretty(&record)?);
                return Ok(());
            }

            match record {
                Some(record) => print_record(&record),
                None => println!("No {} session recorded for room {}", kind, room),
            }
            Ok(())
        }

        SessionCommand::Status { room } => {
            let cleaning = ctx.db.latest_by_room(SessionKind::Cleaning, &room)?;
            let spot_check = ctx.db.latest_by_room(SessionKind::SpotCheck, &room)?;

            if format.is_json() {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "room_id": room,
                        "cleaning": cleaning,
                        "spot_check": spot_check,
                    }))?
                );
                return Ok(());
            }

            println!("Room {}", room);
            print_status_line("Cleaning", cleaning.as_ref());
            print_status_line("Spot check", spot_check.as_ref());
            Ok(())
        }
    }
}

fn print_status_line(label: &str, record: Option<&SessionRecord>) {
    match record {
        Some(record) => {
            let when = match record.ended_at() {
                Some(ended_at) => format!("ended {}", output::format_time(ended_at)),
                None => "still open".to_string(),
            };
            println!(
                "  {:<11} #{} [{}] {}",
                label,
                record.id(),
                output::status_display(record.status()),
                when
            );
        }
        None => println!("  {:<11} none", label),
    }
}

fn print_record(record: &SessionRecord) {
    match record {
        SessionRecord::Cleaning(session) => {
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
            for completion in &session.tasks {
                println!("{}", output::task_line(completion));
            }
        }
        SessionRecord::SpotCheck(session) => {
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
        }
    }
}

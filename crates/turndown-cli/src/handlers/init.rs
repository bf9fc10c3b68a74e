use crate::commands::AppContext;
use crate::output;
use crate::types::OutputFormat;
use anyhow::Result;
use std::path::Path;
use turndown_types::{LocaleMap, Room, RoomId, Task, TaskId};

/// Default catalog seeded on first init: five rooms, five tasks, with
/// English and Indonesian display names.
fn default_rooms() -> Vec<Room> {
    ["101", "102", "103", "201", "202"]
        .into_iter()
        .map(|id| Room {
            id: RoomId::new(id),
            name: LocaleMap::new()
                .with("en", format!("Room {}", id))
                .with("id", format!("Kamar {}", id)),
        })
        .collect()
}

fn default_tasks() -> Vec<Task> {
    let entries = [
        ("make_bed", "Make bed", "Rapikan tempat tidur", true),
        ("clean_bathroom", "Clean bathroom", "Bersihkan kamar mandi", true),
        ("replace_towels", "Replace towels", "Ganti handuk", true),
        ("vacuum_floor", "Vacuum floor", "Sedot debu lantai", false),
        (
            "restock_amenities",
            "Restock amenities",
            "Isi ulang perlengkapan",
            false,
        ),
    ];

    entries
        .into_iter()
        .map(|(id, en, id_name, required)| Task {
            id: TaskId::new(id),
            name: LocaleMap::new().with("en", en).with("id", id_name),
            required,
        })
        .collect()
}

pub fn handle(data_dir: &Path, format: &OutputFormat) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let ctx = AppContext::open(data_dir)?;

    let config_path = ctx.config_path();
    if !config_path.exists() {
        ctx.config.save_to(&config_path)?;
    }

    // Idempotent: re-running init never clobbers catalog edits
    let mut seeded_rooms = 0;
    for room in default_rooms() {
        if !ctx.db.room_exists(&room.id)? {
            ctx.db.upsert_room(&room)?;
            seeded_rooms += 1;
        }
    }
    let mut seeded_tasks = 0;
    for task in default_tasks() {
        if !ctx.db.task_exists(&task.id)? {
            ctx.db.upsert_task(&task)?;
            seeded_tasks += 1;
        }
    }

    if format.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "data_dir": data_dir.display().to_string(),
                "seeded_rooms": seeded_rooms,
                "seeded_tasks": seeded_tasks,
            }))?
        );
    } else {
        output::success(&format!("Initialized {}", data_dir.display()));
        println!("Seeded {} rooms and {} tasks", seeded_rooms, seeded_tasks);
        println!("\nNext: turndown login <user> --role staff");
    }

    Ok(())
}

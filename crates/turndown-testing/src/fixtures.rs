//! Catalog seeding helpers shared by unit and integration tests.

use anyhow::Result;
use turndown_store::Database;
use turndown_types::{LocaleMap, Room, RoomId, Task, TaskId};

/// Rooms every seeded test world contains.
pub const SAMPLE_ROOMS: [&str; 5] = ["101", "102", "103", "201", "202"];

/// A small bilingual catalog: five rooms and three tasks.
///
/// Task ids and translations mirror the standard turndown checklist so
/// integration tests exercise locale fallback with realistic data.
pub fn seed_minimal_catalog(db: &Database) -> Result<()> {
    for room_id in SAMPLE_ROOMS {
        db.upsert_room(&Room {
            id: RoomId::new(room_id),
            name: LocaleMap::new()
                .with("en", format!("Room {}", room_id))
                .with("id", format!("Kamar {}", room_id)),
        })?;
    }

    let tasks = [
        ("make_bed", "Make bed", "Rapikan tempat tidur", true),
        ("clean_bathroom", "Clean bathroom", "Bersihkan kamar mandi", true),
        ("vacuum", "Vacuum floor", "Sedot debu lantai", false),
    ];
    for (id, en, id_name, required) in tasks {
        db.upsert_task(&Task {
            id: TaskId::new(id),
            name: LocaleMap::new().with("en", en).with("id", id_name),
            required,
        })?;
    }

    Ok(())
}

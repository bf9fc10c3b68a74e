use rusqlite::{params, Connection, OptionalExtension};
use turndown_types::{LocaleMap, Room, RoomId, Task, TaskId};

use crate::Result;

pub fn upsert_room(conn: &Connection, room: &Room) -> Result<()> {
    let name = serde_json::to_string(&room.name)?;
    conn.execute(
        r#"
        INSERT INTO rooms (id, name)
        VALUES (?1, ?2)
        ON CONFLICT(id) DO UPDATE SET name = ?2
        "#,
        params![room.id.as_str(), name],
    )?;

    Ok(())
}

pub fn upsert_task(conn: &Connection, task: &Task) -> Result<()> {
    let name = serde_json::to_string(&task.name)?;
    conn.execute(
        r#"
        INSERT INTO tasks (id, name, required)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(id) DO UPDATE SET name = ?2, required = ?3
        "#,
        params![task.id.as_str(), name, task.required],
    )?;

    Ok(())
}

pub fn get_room(conn: &Connection, room_id: &RoomId) -> Result<Option<Room>> {
    let raw = conn
        .query_row(
            "SELECT id, name FROM rooms WHERE id = ?1",
            [room_id.as_str()],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
        )
        .optional()?;

    match raw {
        Some((id, name)) => {
            let name: LocaleMap = serde_json::from_str(&name)?;
            Ok(Some(Room {
                id: RoomId::new(id),
                name,
            }))
        }
        None => Ok(None),
    }
}

pub fn room_exists(conn: &Connection, room_id: &RoomId) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM rooms WHERE id = ?1",
        [room_id.as_str()],
        |row| row.get(0),
    )?;

    Ok(count > 0)
}

pub fn task_exists(conn: &Connection, task_id: &TaskId) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM tasks WHERE id = ?1",
        [task_id.as_str()],
        |row| row.get(0),
    )?;

    Ok(count > 0)
}

pub fn list_rooms(conn: &Connection) -> Result<Vec<Room>> {
    let mut stmt = conn.prepare("SELECT id, name FROM rooms ORDER BY id")?;

    let raw = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut rooms = Vec::with_capacity(raw.len());
    for (id, name) in raw {
        let name: LocaleMap = serde_json::from_str(&name)?;
        rooms.push(Room {
            id: RoomId::new(id),
            name,
        });
    }

    Ok(rooms)
}

pub fn list_tasks(conn: &Connection) -> Result<Vec<Task>> {
    let mut stmt = conn.prepare("SELECT id, name, required FROM tasks ORDER BY id")?;

    let raw = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, bool>(2)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut tasks = Vec::with_capacity(raw.len());
    for (id, name, required) in raw {
        let name: LocaleMap = serde_json::from_str(&name)?;
        tasks.push(Task {
            id: TaskId::new(id),
            name,
            required,
        });
    }

    Ok(tasks)
}

mod catalog;
mod role;
mod session;

pub use catalog::{LocaleMap, Room, RoomId, Task, TaskId};
pub use role::{Identity, Permission, Role};
pub use session::{
    CleaningSession, SessionId, SessionKind, SessionRecord, SessionStatus, SpotCheckSession,
    TaskCompletion,
};

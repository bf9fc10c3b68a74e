pub mod config;
pub mod controller;
pub mod counters;
pub mod error;
pub mod events;
pub mod providers;

pub use config::{Config, Quotas, QuotaTracking};
pub use controller::ShiftController;
pub use counters::DailyCounters;
pub use error::{Error, Result};
pub use events::ShiftEvent;
pub use providers::{Catalog, Clock, IdentityProvider, StoreCatalog, SystemClock};

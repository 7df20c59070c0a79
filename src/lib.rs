//! Medicine reminders with a weekly schedule, tablet counts and a per-day
//! adherence log, persisted to a single JSON file.
//!
//! ```no_run
//! use medicine_reminder::{Reminder, Storage};
//!
//! # fn main() -> Result<(), medicine_reminder::AppError> {
//! let mut storage = Storage::new()?;
//! let id = storage.add_reminder(Reminder::new(
//!     "Aspirin".to_string(),
//!     "1 tablet".to_string(),
//!     "08:00 AM".to_string(),
//!     vec!["Monday".to_string(), "Thursday".to_string()],
//!     30,
//! ))?;
//!
//! for (id, reminder) in storage.due_now() {
//!     println!("[{}] time to take {} ({})", id, reminder.name, reminder.dosage);
//! }
//!
//! storage.mark_taken(id)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
mod error;
mod reminder;
mod storage;

pub use error::{AppError, AppResult};
pub use reminder::Reminder;
pub use storage::{CorruptFilePolicy, Storage};

//! Application configuration constants
//!
//! Centralized configuration for the medicine reminder crate.

/// Default file name for the persisted reminder collection
pub const DEFAULT_REMINDERS_FILE: &str = "reminders.json";

/// Directory name under the platform data dir used by `Storage::new`
pub const APP_DATA_DIR: &str = "MedicineReminder";

/// The seven weekday names a reminder may repeat on
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// 12-hour clock format for reminder times, e.g. "08:00 AM"
pub const TIME_FORMAT: &str = "%I:%M %p";

/// Full weekday name format, e.g. "Monday"
pub const DAY_FORMAT: &str = "%A";

/// Calendar date format for taken-log keys, e.g. "2024-05-06"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

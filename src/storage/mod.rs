mod legacy;
mod local;

use chrono::{Local, NaiveDateTime, NaiveTime};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{APP_DATA_DIR, DEFAULT_REMINDERS_FILE, TIME_FORMAT, WEEKDAYS};
use crate::error::{AppError, AppResult};
use crate::reminder::Reminder;

/// What to do when the reminders file exists but cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptFilePolicy {
    /// Log a warning and start over with an empty list.
    #[default]
    ResetEmpty,
    /// Refuse to open the store.
    Fail,
    /// Copy the unreadable content aside, then start over with an empty list.
    BackupAndReset,
}

/// File-backed reminder store. All mutations are written through to the
/// backing file before they return.
pub struct Storage {
    reminders: Vec<Reminder>,
    file_path: PathBuf,
    on_corrupt: CorruptFilePolicy,
}

impl Storage {
    /// Open the store at its default location under the platform's local
    /// data directory, creating the directory if needed.
    pub fn new() -> AppResult<Self> {
        let app_data_path = dirs::data_local_dir()
            .ok_or_else(|| AppError::storage("Failed to get local data dir"))?
            .join(APP_DATA_DIR);

        fs::create_dir_all(&app_data_path).map_err(|e| AppError::storage(e.to_string()))?;

        Self::open(app_data_path.join(DEFAULT_REMINDERS_FILE))
    }

    /// Open the store backed by the given file with the default corrupt-file
    /// policy.
    pub fn open<P: Into<PathBuf>>(path: P) -> AppResult<Self> {
        Self::open_with(path, CorruptFilePolicy::default())
    }

    /// Open the store backed by the given file. Files written before ids
    /// existed are migrated and re-saved on the spot.
    pub fn open_with<P: Into<PathBuf>>(path: P, on_corrupt: CorruptFilePolicy) -> AppResult<Self> {
        let file_path = path.into();
        let mut reminders = local::load_local(&file_path, on_corrupt)?;

        let migrated = legacy::assign_missing_ids(&mut reminders);

        let storage = Self {
            reminders,
            file_path,
            on_corrupt,
        };

        if migrated {
            info!("Assigned ids to legacy reminders in {}", storage.file_path.display());
            storage.save()?;
        }

        Ok(storage)
    }

    fn save(&self) -> AppResult<()> {
        local::save_local(&self.file_path, &self.reminders)
    }

    fn next_id(&self) -> i64 {
        self.reminders.iter().map(|r| r.id).max().unwrap_or(0).saturating_add(1)
    }

    /// Validate, assign an id, append and persist. Returns the new id.
    pub fn add_reminder(&mut self, mut reminder: Reminder) -> AppResult<i64> {
        validate_weekdays(&reminder.weekdays)?;
        validate_reminder_time(&reminder.reminder_time)?;

        reminder.id = self.next_id();
        let id = reminder.id;
        self.reminders.push(reminder);
        self.save()?;
        Ok(id)
    }

    /// Remove the reminder with the given id and persist.
    pub fn delete_reminder(&mut self, id: i64) -> AppResult<()> {
        let before = self.reminders.len();
        self.reminders.retain(|r| r.id != id);

        if self.reminders.len() == before {
            // unknown id is a no-op
            return Ok(());
        }

        self.save()
    }

    /// Mark the reminder as taken today, consuming one tablet, and persist.
    pub fn mark_taken(&mut self, id: i64) -> AppResult<()> {
        let today = Local::now().date_naive();
        let reminder = self
            .reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found(format!("no reminder with id {}", id)))?;

        reminder.mark_taken_on(today);
        self.save()
    }

    /// Mark the reminder as not taken today and persist. The quantity is
    /// untouched.
    pub fn mark_untaken(&mut self, id: i64) -> AppResult<()> {
        let today = Local::now().date_naive();
        let reminder = self
            .reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found(format!("no reminder with id {}", id)))?;

        reminder.mark_untaken_on(today);
        self.save()
    }

    /// All reminders ordered by their time string. The order is plain string
    /// order, so "01:00 PM" sorts before "09:00 AM". Reminders sharing a time
    /// keep their stored order.
    pub fn all_reminders(&self) -> Vec<Reminder> {
        let mut sorted = self.reminders.clone();
        sorted.sort_by(|a, b| a.reminder_time.cmp(&b.reminder_time));
        sorted
    }

    /// Reminders due at the given moment, as (id, reminder) pairs.
    pub fn due_reminders(&self, at: NaiveDateTime) -> Vec<(i64, Reminder)> {
        self.reminders
            .iter()
            .filter(|r| r.is_due_at(at))
            .map(|r| (r.id, r.clone()))
            .collect()
    }

    /// Reminders due right now on the local clock.
    pub fn due_now(&self) -> Vec<(i64, Reminder)> {
        self.due_reminders(Local::now().naive_local())
    }

    pub fn reminder(&self, id: i64) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.id == id)
    }

    /// The reminders in stored order, unsorted.
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn corrupt_file_policy(&self) -> CorruptFilePolicy {
        self.on_corrupt
    }
}

fn validate_weekdays(weekdays: &[String]) -> AppResult<()> {
    for day in weekdays {
        if !WEEKDAYS.contains(&day.as_str()) {
            return Err(AppError::validation(format!("unknown weekday: {}", day)));
        }
    }
    Ok(())
}

fn validate_reminder_time(value: &str) -> AppResult<()> {
    let parsed = NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|_| AppError::validation(format!("invalid reminder time: {}", value)))?;

    // Reject inputs that parse but render differently, like "8:00 AM".
    if parsed.format(TIME_FORMAT).to_string() != value {
        return Err(AppError::validation(format!(
            "reminder time must be in HH:MM AM/PM form: {}",
            value
        )));
    }

    Ok(())
}

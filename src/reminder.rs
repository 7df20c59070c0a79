use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{DATE_FORMAT, DAY_FORMAT, TIME_FORMAT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub reminder_time: String,
    #[serde(default)]
    pub weekdays: Vec<String>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub taken_log: BTreeMap<String, bool>,
}

impl Reminder {
    pub fn new(
        name: String,
        dosage: String,
        reminder_time: String,
        weekdays: Vec<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: 0, // Will be set by storage
            name,
            dosage,
            reminder_time,
            weekdays,
            quantity,
            taken_log: BTreeMap::new(),
        }
    }

    /// Whether this reminder fires at the given moment: the moment's
    /// "HH:MM AM/PM" rendering must equal `reminder_time` exactly and its
    /// weekday name must appear in `weekdays`.
    pub fn is_due_at(&self, at: NaiveDateTime) -> bool {
        let time = at.format(TIME_FORMAT).to_string();
        let day = at.format(DAY_FORMAT).to_string();
        self.reminder_time == time && self.weekdays.contains(&day)
    }

    /// Taken status recorded for the given date, false when nothing was recorded.
    pub fn taken_on(&self, date: NaiveDate) -> bool {
        let key = date.format(DATE_FORMAT).to_string();
        self.taken_log.get(&key).copied().unwrap_or(false)
    }

    pub fn taken_today(&self) -> bool {
        self.taken_on(Local::now().date_naive())
    }

    /// Record the reminder as taken on the given date and consume one tablet.
    /// The quantity stops at zero; the log entry is still written.
    pub fn mark_taken_on(&mut self, date: NaiveDate) {
        let key = date.format(DATE_FORMAT).to_string();
        self.taken_log.insert(key, true);
        if self.quantity > 0 {
            self.quantity -= 1;
        }
    }

    /// Record the reminder as not taken on the given date. Overwrites any
    /// earlier entry for that date; the quantity is untouched.
    pub fn mark_untaken_on(&mut self, date: NaiveDate) {
        let key = date.format(DATE_FORMAT).to_string();
        self.taken_log.insert(key, false);
    }
}

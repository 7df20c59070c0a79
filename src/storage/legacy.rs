use std::collections::HashSet;

use crate::reminder::Reminder;

/// Assign ids to reminders loaded from files written before ids existed.
///
/// Records without an id deserialize as 0. Each one gets the next free id,
/// counting up from the highest id already present. Duplicated ids are
/// resolved the same way. Returns true when anything changed so the caller
/// knows to re-save the file.
pub(crate) fn assign_missing_ids(reminders: &mut [Reminder]) -> bool {
    let mut next = reminders.iter().map(|r| r.id).max().unwrap_or(0).max(0).saturating_add(1);
    let mut seen = HashSet::new();
    let mut changed = false;

    for reminder in reminders.iter_mut() {
        if reminder.id <= 0 || !seen.insert(reminder.id) {
            reminder.id = next;
            seen.insert(next);
            next = next.saturating_add(1);
            changed = true;
        }
    }

    changed
}

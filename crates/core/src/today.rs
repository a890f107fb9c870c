//! "Today" summary of inventory updates per active shift.
//!
//! Given a reference time and a store's time cards, picks the shifts that
//! are active (see [`ShiftWindow::is_active_at`]), looks up the inventory
//! records logged against each, and condenses them into one
//! [`ShiftSummary`] per shift. The final list is in reverse iteration order.

use chrono::{FixedOffset, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::shift_window::{ShiftParseError, ShiftWindow};
use crate::types::Timestamp;

/// Anything that carries a time card's date parts and work-time string.
pub trait ShiftSchedule {
    fn year(&self) -> &str;
    fn month(&self) -> &str;
    fn day(&self) -> &str;
    fn work_time(&self) -> &str;

    /// Parse this schedule into a concrete window.
    fn window(&self) -> Result<ShiftWindow, ShiftParseError> {
        ShiftWindow::parse(self.year(), self.month(), self.day(), self.work_time())
    }
}

/// An inventory record as far as summarisation is concerned.
pub trait InventoryEntry {
    fn inventory_name(&self) -> &str;
}

/// Source of the inventory records logged against a shift.
///
/// Implementations return entries in the store's natural order; the first
/// entry becomes the summary's primary item.
pub trait EntryLookup<S> {
    type Entry: InventoryEntry + Clone;
    type Error;

    fn entries_for(&self, shift: &S) -> Result<Vec<Self::Entry>, Self::Error>;
}

/// Condensed view of the inventory records of one active shift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftSummary<S, E> {
    /// Inventory name of the first record.
    pub primary_item_name: String,
    /// `""` for a single record, `" and N more"` otherwise.
    pub count_suffix: String,
    pub time_card: S,
    pub first_record: E,
}

/// A shift whose work time could not be parsed.
#[derive(Debug, PartialEq)]
pub struct InvalidShift<'a, S> {
    pub shift: &'a S,
    pub error: ShiftParseError,
}

/// The shifts of `shifts` that are active at `reference`, in input order.
///
/// Every shift is parsed, active or not; the first unparseable one is
/// returned as the error.
pub fn active_shifts<S: ShiftSchedule>(
    reference: NaiveDateTime,
    shifts: &[S],
) -> Result<Vec<&S>, InvalidShift<'_, S>> {
    let mut active = Vec::new();
    for shift in shifts {
        match shift.window() {
            Ok(window) if window.is_active_at(reference) => active.push(shift),
            Ok(_) => {}
            Err(error) => return Err(InvalidShift { shift, error }),
        }
    }
    Ok(active)
}

/// Midnight at the start of the current day in the business timezone.
///
/// This is the reference time used for the "today" view.
pub fn start_of_local_day(now: Timestamp, offset: FixedOffset) -> NaiveDateTime {
    now.with_timezone(&offset).date_naive().and_time(NaiveTime::MIN)
}

/// Suffix appended to the primary item name for `total` records.
pub fn count_suffix(total: usize) -> String {
    if total < 2 {
        String::new()
    } else {
        format!(" and {} more", total - 1)
    }
}

/// Summarise the inventory records of every shift active at `reference`.
///
/// Shifts without records are skipped. A time card whose work time cannot be
/// parsed aborts the whole evaluation.
pub fn summarize_active_shifts<S, L>(
    reference: NaiveDateTime,
    shifts: &[S],
    lookup: &L,
) -> Result<Vec<ShiftSummary<S, L::Entry>>, L::Error>
where
    S: ShiftSchedule + Clone,
    L: EntryLookup<S>,
    L::Error: From<ShiftParseError>,
{
    let mut summaries = Vec::new();

    for shift in shifts {
        if !shift.window()?.is_active_at(reference) {
            continue;
        }

        let entries = lookup.entries_for(shift)?;
        let Some(first) = entries.first() else {
            continue;
        };

        summaries.push(ShiftSummary {
            primary_item_name: first.inventory_name().to_string(),
            count_suffix: count_suffix(entries.len()),
            time_card: shift.clone(),
            first_record: first.clone(),
        });
    }

    summaries.reverse();
    Ok(summaries)
}

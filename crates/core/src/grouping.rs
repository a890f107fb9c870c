//! Relating inventory records to the shift they were logged against.

use std::collections::HashSet;

use crate::types::DbId;

/// A record that belongs to a time card.
pub trait ShiftKeyed {
    fn shift_id(&self) -> DbId;
}

/// Shift ids referenced by `records`, each once, in the order first seen.
///
/// Used to fetch the records of every referenced shift exactly once, even
/// though the listing repeats a shift for each of its records.
pub fn distinct_shift_ids<R: ShiftKeyed>(records: &[R]) -> Vec<DbId> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(ShiftKeyed::shift_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

//! Inclusive date-range filtering.
//!
//! Bounds and record dates are zero-padded `YYYY-MM-DD` strings, so plain
//! lexical comparison is also chronological comparison. Undated records
//! cannot be excluded by a range they have no value for and always pass.

use crate::model::InsightRecord;

pub fn filter_by_date(
    mut records: Vec<InsightRecord>,
    start: Option<&str>,
    end: Option<&str>,
) -> Vec<InsightRecord> {
    if start.is_none() && end.is_none() {
        return records;
    }

    records.retain(|record| {
        let Some(date) = record.date.as_deref() else {
            return true;
        };
        if let Some(start) = start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = end {
            if date > end {
                return false;
            }
        }
        true
    });
    records
}

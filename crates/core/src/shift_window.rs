//! Shift time windows parsed from time-card work-time strings.
//!
//! A time card stores its date as separate `year` / `month` / `day` strings
//! and its hours as `"H:MM~H:MM"` (or `"HH:MM~HH:MM"`). An hour token of
//! `24` means midnight:
//!
//! - on the start side it is read as `00` on the card's own date;
//! - on the end side it is read as `00` on the **following** day.
//!
//! [`ShiftWindow::parse`] applies both rules once and yields concrete
//! wall-clock instants in the business timezone.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Hour token that denotes midnight.
pub const MIDNIGHT_HOUR: u32 = 24;

/// Separator between the start and end halves of a work-time string.
const SPAN_SEPARATOR: char = '~';

/// How far ahead of the reference time a shift start may lie and still count
/// as active.
pub fn lookahead() -> Duration {
    Duration::hours(24)
}

/// Errors produced while parsing a time card into a [`ShiftWindow`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShiftParseError {
    #[error("work time '{0}' is missing the '~' separator")]
    MissingSeparator(String),

    #[error("time token '{0}' is not in H:MM form")]
    MalformedTime(String),

    #[error("time token '{0}' is out of range")]
    TimeOutOfRange(String),

    #[error("invalid calendar date {year}-{month}-{day}")]
    InvalidDate {
        year: String,
        month: String,
        day: String,
    },

    #[error("shift end {end} is not after start {start}")]
    EndNotAfterStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// Concrete start and end of a shift, after midnight-rollover normalization.
///
/// Invariant: `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ShiftWindow {
    /// Build a window from a time card's date parts and work-time string.
    pub fn parse(
        year: &str,
        month: &str,
        day: &str,
        work_time: &str,
    ) -> Result<Self, ShiftParseError> {
        let date = parse_date(year, month, day)?;

        let (start_token, end_token) = work_time
            .split_once(SPAN_SEPARATOR)
            .ok_or_else(|| ShiftParseError::MissingSeparator(work_time.to_string()))?;

        let start_clock = ClockToken::parse(start_token)?;
        let end_clock = ClockToken::parse(end_token)?;

        let start = date.and_time(start_clock.time()?);

        let end_date = if end_clock.is_midnight_rollover() {
            start.date() + Duration::days(1)
        } else {
            date
        };
        let end = end_date.and_time(end_clock.time()?);

        if start >= end {
            return Err(ShiftParseError::EndNotAfterStart { start, end });
        }

        Ok(Self { start, end })
    }

    /// Whether the shift counts as active at `reference`.
    ///
    /// A shift is active when it starts exactly at `reference`, or starts
    /// after `reference` but strictly within the next 24 hours. A shift that
    /// has already started is *not* active, even while it is in progress.
    pub fn is_active_at(&self, reference: NaiveDateTime) -> bool {
        self.start == reference || (reference < self.start && reference + lookahead() > self.start)
    }
}

/// A single `H:MM` token before midnight normalization.
#[derive(Debug, Clone, Copy)]
struct ClockToken {
    hour: u32,
    minute: u32,
    raw_is_24: bool,
}

impl ClockToken {
    fn parse(token: &str) -> Result<Self, ShiftParseError> {
        let token = token.trim();
        let malformed = || ShiftParseError::MalformedTime(token.to_string());

        let (hour, minute) = token.split_once(':').ok_or_else(malformed)?;
        if !is_digits(hour, 1, 2) || !is_digits(minute, 2, 2) {
            return Err(malformed());
        }

        let hour: u32 = hour.parse().map_err(|_| malformed())?;
        let minute: u32 = minute.parse().map_err(|_| malformed())?;
        if hour > MIDNIGHT_HOUR || minute > 59 {
            return Err(ShiftParseError::TimeOutOfRange(token.to_string()));
        }

        Ok(Self {
            hour,
            minute,
            raw_is_24: hour == MIDNIGHT_HOUR,
        })
    }

    /// `24:MM` on the end side pushes the end onto the next day.
    fn is_midnight_rollover(&self) -> bool {
        self.raw_is_24
    }

    fn time(&self) -> Result<NaiveTime, ShiftParseError> {
        let hour = if self.raw_is_24 { 0 } else { self.hour };
        NaiveTime::from_hms_opt(hour, self.minute, 0).ok_or_else(|| {
            ShiftParseError::TimeOutOfRange(format!("{}:{:02}", self.hour, self.minute))
        })
    }
}

fn parse_date(year: &str, month: &str, day: &str) -> Result<NaiveDate, ShiftParseError> {
    let invalid = || ShiftParseError::InvalidDate {
        year: year.to_string(),
        month: month.to_string(),
        day: day.to_string(),
    };

    if !is_digits(year, 1, 4) || !is_digits(month, 1, 2) || !is_digits(day, 1, 2) {
        return Err(invalid());
    }

    let y: i32 = year.parse().map_err(|_| invalid())?;
    let m: u32 = month.parse().map_err(|_| invalid())?;
    let d: u32 = day.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(invalid)
}

fn is_digits(s: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    // -----------------------------------------------------------------------
    // Parsing
    // -----------------------------------------------------------------------

    #[test]
    fn parses_plain_day_shift() {
        let w = ShiftWindow::parse("2023", "3", "1", "09:00~18:00").unwrap();
        assert_eq!(w.start, at(2023, 3, 1, 9, 0));
        assert_eq!(w.end, at(2023, 3, 1, 18, 0));
    }

    #[test]
    fn accepts_single_digit_hours_and_padded_date() {
        let w = ShiftWindow::parse("2023", "03", "07", "9:30~13:45").unwrap();
        assert_eq!(w.start, at(2023, 3, 7, 9, 30));
        assert_eq!(w.end, at(2023, 3, 7, 13, 45));
    }

    #[test]
    fn end_hour_24_rolls_to_next_day() {
        let w = ShiftWindow::parse("2023", "3", "1", "22:00~24:00").unwrap();
        assert_eq!(w.start, at(2023, 3, 1, 22, 0));
        assert_eq!(w.end, at(2023, 3, 2, 0, 0));
    }

    #[test]
    fn end_rollover_crosses_month_and_year() {
        let w = ShiftWindow::parse("2022", "12", "31", "20:00~24:00").unwrap();
        assert_eq!(w.end, at(2023, 1, 1, 0, 0));

        let w = ShiftWindow::parse("2024", "2", "28", "18:00~24:00").unwrap();
        assert_eq!(w.end, at(2024, 2, 29, 0, 0));
    }

    #[test]
    fn start_hour_24_stays_on_given_date() {
        let w = ShiftWindow::parse("2023", "3", "1", "24:00~08:00").unwrap();
        assert_eq!(w.start, at(2023, 3, 1, 0, 0));
        assert_eq!(w.end, at(2023, 3, 1, 8, 0));
    }

    #[test]
    fn hour_24_keeps_minutes() {
        let w = ShiftWindow::parse("2023", "3", "1", "23:00~24:30").unwrap();
        assert_eq!(w.end, at(2023, 3, 2, 0, 30));
    }

    #[test]
    fn missing_separator_is_rejected() {
        assert_matches!(
            ShiftWindow::parse("2023", "3", "1", "09:00-18:00"),
            Err(ShiftParseError::MissingSeparator(_))
        );
    }

    #[test]
    fn non_numeric_tokens_are_rejected() {
        assert_matches!(
            ShiftWindow::parse("2023", "3", "1", "ab:00~18:00"),
            Err(ShiftParseError::MalformedTime(_))
        );
        assert_matches!(
            ShiftWindow::parse("2023", "3", "1", "09~18:00"),
            Err(ShiftParseError::MalformedTime(_))
        );
        assert_matches!(
            ShiftWindow::parse("2023", "3", "1", "09:0~18:00"),
            Err(ShiftParseError::MalformedTime(_))
        );
    }

    #[test]
    fn out_of_range_tokens_are_rejected() {
        assert_matches!(
            ShiftWindow::parse("2023", "3", "1", "25:00~26:00"),
            Err(ShiftParseError::TimeOutOfRange(_))
        );
        assert_matches!(
            ShiftWindow::parse("2023", "3", "1", "09:60~18:00"),
            Err(ShiftParseError::TimeOutOfRange(_))
        );
    }

    #[test]
    fn invalid_dates_are_rejected() {
        assert_matches!(
            ShiftWindow::parse("2023", "2", "30", "09:00~18:00"),
            Err(ShiftParseError::InvalidDate { .. })
        );
        assert_matches!(
            ShiftWindow::parse("2023", "", "1", "09:00~18:00"),
            Err(ShiftParseError::InvalidDate { .. })
        );
        assert_matches!(
            ShiftWindow::parse("23a", "3", "1", "09:00~18:00"),
            Err(ShiftParseError::InvalidDate { .. })
        );
    }

    #[test]
    fn end_before_start_is_rejected() {
        assert_matches!(
            ShiftWindow::parse("2023", "3", "1", "22:00~06:00"),
            Err(ShiftParseError::EndNotAfterStart { .. })
        );
        assert_matches!(
            ShiftWindow::parse("2023", "3", "1", "09:00~09:00"),
            Err(ShiftParseError::EndNotAfterStart { .. })
        );
    }

    // -----------------------------------------------------------------------
    // Active predicate
    // -----------------------------------------------------------------------

    #[test]
    fn active_when_reference_equals_start() {
        let w = ShiftWindow::parse("2023", "3", "1", "09:00~18:00").unwrap();
        assert!(w.is_active_at(at(2023, 3, 1, 9, 0)));
    }

    #[test]
    fn active_when_start_is_within_next_24_hours() {
        let w = ShiftWindow::parse("2023", "3", "1", "09:00~18:00").unwrap();
        assert!(w.is_active_at(at(2023, 3, 1, 0, 0)));
        assert!(w.is_active_at(at(2023, 2, 28, 9, 1)));
    }

    #[test]
    fn inactive_when_start_is_exactly_24_hours_ahead() {
        let w = ShiftWindow::parse("2023", "3", "1", "09:00~18:00").unwrap();
        assert!(!w.is_active_at(at(2023, 2, 28, 9, 0)));
    }

    #[test]
    fn inactive_when_start_is_further_ahead() {
        let w = ShiftWindow::parse("2023", "3", "1", "09:00~18:00").unwrap();
        assert!(!w.is_active_at(at(2023, 2, 27, 12, 0)));
    }

    #[test]
    fn inactive_once_shift_has_started() {
        let w = ShiftWindow::parse("2023", "3", "1", "09:00~18:00").unwrap();
        assert!(!w.is_active_at(at(2023, 3, 1, 9, 1)));
        assert!(!w.is_active_at(at(2023, 3, 1, 12, 0)));
        assert!(!w.is_active_at(at(2023, 3, 2, 0, 0)));
    }
}

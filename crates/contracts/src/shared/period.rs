//! Reporting period selection and validation.
//!
//! A period is an inclusive `[start, end]` date range. It is always replaced
//! wholesale: the UI never mutates one bound of an existing period in place.

use chrono::{Datelike, Duration, NaiveDate};

/// Inclusive date range used to scope the weekly report query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportPeriod {
    /// The current calendar week containing `today`: Sunday through today,
    /// capped at the week's Saturday.
    ///
    /// The end bound is clamped to `today` so the default period is always
    /// accepted by [`validate`] — an uncapped Saturday end would be in the
    /// future on every other weekday.
    pub fn default_week(today: NaiveDate) -> Self {
        let start = today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));
        Self {
            start,
            end: (start + Duration::days(6)).min(today),
        }
    }
}

/// Reason a user-chosen date range was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodError {
    MissingDates,
    StartInFuture,
    EndInFuture,
    StartAfterEnd,
}

/// Validate a user-chosen pair of dates against `today`.
///
/// "Future" means strictly after `today`; `today` itself is accepted on
/// either bound (end-of-day semantics). Pure: callers surface the reason as
/// a user-facing message and block the dependent fetch.
pub fn validate(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), PeriodError> {
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        _ => return Err(PeriodError::MissingDates),
    };
    if start > today {
        return Err(PeriodError::StartInFuture);
    }
    if end > today {
        return Err(PeriodError::EndInFuture);
    }
    if start > end {
        return Err(PeriodError::StartAfterEnd);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_week_starts_sunday_ends_today() {
        // Wednesday: end is clamped to today, not the week's Saturday.
        let week = ReportPeriod::default_week(date(2024, 1, 3));
        assert_eq!(week.start, date(2023, 12, 31));
        assert_eq!(week.end, date(2024, 1, 3));
        assert_eq!(week.start.weekday(), Weekday::Sun);
    }

    #[test]
    fn default_week_on_sunday_is_a_single_day() {
        let today = date(2024, 1, 7); // Sunday
        let week = ReportPeriod::default_week(today);
        assert_eq!(week.start, today);
        assert_eq!(week.end, today);
    }

    #[test]
    fn default_week_on_saturday_spans_the_full_week() {
        let today = date(2024, 1, 6); // Saturday
        let week = ReportPeriod::default_week(today);
        assert_eq!(week.start, date(2023, 12, 31));
        assert_eq!(week.end, today);
        assert_eq!(week.end - week.start, Duration::days(6));
    }

    #[test]
    fn default_week_invariants_hold_across_a_year() {
        let mut day = date(2024, 1, 1);
        while day <= date(2024, 12, 31) {
            let week = ReportPeriod::default_week(day);
            assert_eq!(week.start.weekday(), Weekday::Sun);
            assert!(week.start <= day && day <= week.end);
            assert!(week.end - week.start <= Duration::days(6));
            day += Duration::days(1);
        }
    }

    #[test]
    fn default_week_passes_validation_every_weekday() {
        // The default/reset period must never block the initial fetch.
        for offset in 0..7 {
            let today = date(2024, 1, 3) + Duration::days(offset);
            let week = ReportPeriod::default_week(today);
            assert_eq!(validate(Some(week.start), Some(week.end), today), Ok(()));
        }
    }

    #[test]
    fn validate_rejects_missing_bounds() {
        let today = date(2024, 6, 15);
        assert_eq!(
            validate(None, Some(today), today),
            Err(PeriodError::MissingDates)
        );
        assert_eq!(
            validate(Some(today), None, today),
            Err(PeriodError::MissingDates)
        );
        assert_eq!(validate(None, None, today), Err(PeriodError::MissingDates));
    }

    #[test]
    fn validate_rejects_future_start() {
        let today = date(2024, 6, 15);
        assert_eq!(
            validate(Some(date(2024, 6, 16)), Some(date(2024, 6, 17)), today),
            Err(PeriodError::StartInFuture)
        );
    }

    #[test]
    fn validate_rejects_future_end() {
        let today = date(2024, 6, 15);
        assert_eq!(
            validate(Some(date(2024, 6, 10)), Some(date(2024, 6, 16)), today),
            Err(PeriodError::EndInFuture)
        );
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let today = date(2024, 6, 15);
        assert_eq!(
            validate(Some(date(2024, 6, 10)), Some(date(2024, 6, 5)), today),
            Err(PeriodError::StartAfterEnd)
        );
    }

    #[test]
    fn validate_accepts_well_formed_ranges() {
        let today = date(2024, 6, 15);
        assert_eq!(
            validate(Some(date(2024, 6, 10)), Some(date(2024, 6, 14)), today),
            Ok(())
        );
        // Today itself is allowed on both bounds.
        assert_eq!(validate(Some(today), Some(today), today), Ok(()));
        // Single-day range in the past.
        assert_eq!(
            validate(Some(date(2024, 1, 1)), Some(date(2024, 1, 1)), today),
            Ok(())
        );
    }
}

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Default timezone for expense entry.
/// This is the canonical timezone used to resolve wall-clock selections
/// when a trip has not configured one. For a Korea-based travel tracker,
/// Asia/Seoul is a sensible default.
pub const DEFAULT_EXPENSE_TZ: Tz = chrono_tz::Asia::Seoul;

/// Joins a calendar date and a time of day into a UTC instant, resolving
/// the wall-clock combination in the given timezone.
///
/// This is the single source of truth for turning a user's date/time
/// selection into an absolute instant. DST transitions resolve the way
/// platform date-time APIs do: an ambiguous wall clock maps to the earlier
/// offset, and a wall clock inside a spring-forward gap shifts past the
/// transition.
///
/// # Arguments
/// * `date` - The calendar date the selection is pinned to
/// * `time` - The selected time of day
/// * `tz` - The timezone the wall clock is read in
pub fn compose_local_instant(date: NaiveDate, time: NaiveTime, tz: Tz) -> DateTime<Utc> {
    let local = date.and_time(time);
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            // Gap: retry one hour later, which lands past the transition
            // for real-world offsets.
            let shifted = local + Duration::hours(1);
            match tz.from_local_datetime(&shifted) {
                LocalResult::Single(dt) => dt.with_timezone(&Utc),
                LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
                LocalResult::None => Utc.from_utc_datetime(&local),
            }
        }
    }
}

/// Current time of day as read on a clock in the given timezone.
pub fn local_time_now(tz: Tz) -> NaiveTime {
    Utc::now().with_timezone(&tz).time()
}

/// Converts a UTC instant to the calendar date it falls on in the given
/// timezone. This is the inverse direction of [`compose_local_instant`]:
/// use it to decide which trip day a stored instant belongs to.
pub fn expense_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Convenience that reads today's date in the default expense timezone.
/// Equivalent to `expense_date_from_utc(Utc::now(), DEFAULT_EXPENSE_TZ)`.
pub fn expense_date_today() -> NaiveDate {
    expense_date_from_utc(Utc::now(), DEFAULT_EXPENSE_TZ)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_composes_seoul_wall_clock_into_utc_instant() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let instant = compose_local_instant(date, hms(14, 30, 0), chrono_tz::Asia::Seoul);
        assert_eq!(
            instant,
            Utc.with_ymd_and_hms(2024, 3, 15, 5, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_same_wall_clock_differs_across_zones() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let seoul = compose_local_instant(date, hms(14, 30, 0), chrono_tz::Asia::Seoul);
        let paris = compose_local_instant(date, hms(14, 30, 0), chrono_tz::Europe::Paris);
        assert_ne!(seoul, paris);
    }

    #[test]
    fn test_ambiguous_wall_clock_resolves_to_earlier_instant() {
        // America/New_York 2024-11-03 01:30 occurs twice; the earlier
        // reading is still on EDT (UTC-4).
        let date = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap();
        let instant = compose_local_instant(date, hms(1, 30, 0), chrono_tz::America::New_York);
        assert_eq!(
            instant,
            Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_gap_wall_clock_shifts_past_transition() {
        // America/New_York 2024-03-10 02:30 does not exist; the resolver
        // lands at 03:30 EDT.
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let instant = compose_local_instant(date, hms(2, 30, 0), chrono_tz::America::New_York);
        assert_eq!(
            instant,
            Utc.with_ymd_and_hms(2024, 3, 10, 7, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_seconds_survive_composition() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let instant = compose_local_instant(date, hms(14, 30, 45), chrono_tz::Asia::Seoul);
        assert_eq!(
            instant,
            Utc.with_ymd_and_hms(2024, 3, 15, 5, 30, 45).unwrap()
        );
    }

    #[test]
    fn test_instant_maps_to_local_calendar_date() {
        // 16:30 UTC is already past midnight on a Seoul clock but still
        // afternoon in Paris.
        let instant = Utc.with_ymd_and_hms(2024, 3, 15, 16, 30, 0).unwrap();
        assert_eq!(
            expense_date_from_utc(instant, chrono_tz::Asia::Seoul),
            NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()
        );
        assert_eq!(
            expense_date_from_utc(instant, chrono_tz::Europe::Paris),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_default_zone_date_never_trails_utc() {
        // Asia/Seoul is UTC+9 with no DST; its date is UTC's or one ahead.
        let today = expense_date_today();
        let utc_today = Utc::now().date_naive();
        assert!(today == utc_today || today.pred_opt() == Some(utc_today));
    }
}

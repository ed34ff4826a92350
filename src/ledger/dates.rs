use super::policy::{COUNT_WEEKENDS, INCLUSIVE_DATES};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};

/// Parses an ISO-8601 calendar date. Full timestamps are accepted and
/// truncated to their date part.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Some(ts.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|ts| ts.date())
}

/// Days charged for a request spanning `start..=end` under the leave policy.
pub fn leave_days(start: NaiveDate, end: NaiveDate) -> u32 {
    count_days(start, end, COUNT_WEEKENDS, INCLUSIVE_DATES)
}

fn count_days(start: NaiveDate, end: NaiveDate, count_weekends: bool, inclusive: bool) -> u32 {
    if end < start {
        return 0;
    }
    let last = if inclusive { Some(end) } else { end.pred_opt() };
    let Some(last) = last.filter(|last| *last >= start) else {
        return 0;
    };

    if count_weekends {
        let span = (last - start).num_days() + 1;
        return u32::try_from(span).unwrap_or(0);
    }
    let weekdays = start
        .iter_days()
        .take_while(|day| *day <= last)
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .count();
    u32::try_from(weekdays).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_plain_dates_and_timestamps() {
        assert_eq!(parse_date("2024-03-01"), Some(d(2024, 3, 1)));
        assert_eq!(parse_date(" 2024-03-01 "), Some(d(2024, 3, 1)));
        assert_eq!(parse_date("2024-03-01T10:15:00"), Some(d(2024, 3, 1)));
        assert_eq!(parse_date("2024-03-01T23:00:00+02:00"), Some(d(2024, 3, 1)));
        assert_eq!(parse_date("2024-03-01T10:15"), Some(d(2024, 3, 1)));
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("tomorrow"), None);
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("01/03/2024"), None);
    }

    #[test]
    fn counts_both_endpoints() {
        assert_eq!(leave_days(d(2024, 3, 1), d(2024, 3, 5)), 5);
        assert_eq!(leave_days(d(2024, 3, 1), d(2024, 3, 1)), 1);
        assert_eq!(leave_days(d(2024, 2, 28), d(2024, 3, 1)), 3);
    }

    #[test]
    fn weekends_are_charged() {
        // 2024-03-09 is a Saturday.
        assert_eq!(leave_days(d(2024, 3, 9), d(2024, 3, 10)), 2);
        assert_eq!(leave_days(d(2024, 3, 8), d(2024, 3, 11)), 4);
    }

    #[test]
    fn policy_variants_change_the_charge() {
        // Fri..Mon
        let (fri, mon) = (d(2024, 3, 8), d(2024, 3, 11));
        assert_eq!(count_days(fri, mon, false, true), 2);
        assert_eq!(count_days(fri, mon, true, false), 3);
        assert_eq!(count_days(fri, mon, false, false), 1);
        assert_eq!(count_days(fri, fri, true, false), 0);
        assert_eq!(count_days(mon, fri, true, true), 0);
    }
}

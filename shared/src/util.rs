use chrono::{Datelike, NaiveDate, Utc};

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Today's calendar date (UTC)
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Current calendar year (UTC)
pub fn current_year() -> i32 {
    today().year()
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month following the one containing `date`
pub fn next_month_start(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// The `count` (year, month) pairs ending with the month of `date`, oldest first
pub fn trailing_months(date: NaiveDate, count: u32) -> Vec<(i32, u32)> {
    let mut year = date.year();
    let mut month = date.month();
    let mut months = Vec::with_capacity(count as usize);
    for _ in 0..count {
        months.push((year, month));
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
    }
    months.reverse();
    months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_start(date(2024, 3, 17)), date(2024, 3, 1));
        assert_eq!(next_month_start(date(2024, 3, 17)), date(2024, 4, 1));
        assert_eq!(next_month_start(date(2024, 12, 31)), date(2025, 1, 1));
    }

    #[test]
    fn test_trailing_months_wraps_year() {
        let months = trailing_months(date(2024, 2, 10), 6);
        assert_eq!(
            months,
            vec![(2023, 9), (2023, 10), (2023, 11), (2023, 12), (2024, 1), (2024, 2)]
        );
    }

    #[test]
    fn test_trailing_months_single() {
        assert_eq!(trailing_months(date(2024, 7, 1), 1), vec![(2024, 7)]);
    }
}

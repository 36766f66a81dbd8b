use chrono::{TimeZone, Utc};

/// `dd-MM-yyyy`
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Renders epoch seconds as a calendar date in `tz`, or `-` if out of range
pub fn format_date<Tz>(date_time: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match Utc.timestamp_opt(date_time, 0).single() {
        Some(t) => t.with_timezone(tz).format(DATE_FORMAT).to_string(),
        None => String::from("-"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_in_timezone() {
        // 2021-03-04T23:30:00Z
        let t = 1614900600;
        assert_eq!(format_date(t, &Utc), "04-03-2021");
        assert_eq!(format_date(t, &chrono_tz::Europe::Moscow), "05-03-2021");
    }

    #[test]
    fn out_of_range_is_a_dash() {
        assert_eq!(format_date(i64::MAX, &Utc), "-");
    }
}

use chrono::{Local, NaiveDate, NaiveDateTime};

const DATETIME_LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Wall-clock "now" on the user's machine, without timezone information.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parses the value of a `datetime-local` input. No timezone is applied.
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DATETIME_LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Minimum value for a `datetime-local` picker so past slots are greyed out.
pub fn datetime_local_min(now: NaiveDateTime) -> String {
    now.format("%Y-%m-%dT%H:%M").to_string()
}

pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn parses_minute_and_second_precision() {
        let minute = parse_datetime_local("2030-05-17T14:30").unwrap();
        assert_eq!(minute.format("%Y-%m-%d %H:%M:%S").to_string(), "2030-05-17 14:30:00");
        let second = parse_datetime_local("2030-05-17T14:30:45").unwrap();
        assert_eq!(second.format("%H:%M:%S").to_string(), "14:30:45");
    }

    #[wasm_bindgen_test]
    fn rejects_garbage_and_impossible_dates() {
        assert!(parse_datetime_local("tomorrow").is_none());
        assert!(parse_datetime_local("2030-02-30T10:00").is_none());
        assert!(parse_datetime_local("2030-05-17T25:00").is_none());
    }

    #[wasm_bindgen_test]
    fn display_and_min_formats() {
        let date = NaiveDate::from_ymd_opt(2030, 1, 5).unwrap();
        assert_eq!(format_display_date(date), "05 Jan 2030");
        let now = date.and_hms_opt(9, 7, 59).unwrap();
        assert_eq!(datetime_local_min(now), "2030-01-05T09:07");
    }
}

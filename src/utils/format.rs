use chrono::{DateTime, NaiveDate, Utc};

/// Track/album running time as "m:ss" (or "h:mm:ss" past the hour).
pub fn format_duration(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Release dates render as "Mar 14, 2024"; unannounced dates as "TBA".
pub fn format_release_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "TBA".to_string(),
    }
}

pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => "draft".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn durations_under_an_hour_use_minutes_and_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(225), "3:45");
    }

    #[test]
    fn durations_past_an_hour_include_hours() {
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(3661), "1:01:01");
    }

    #[test]
    fn release_dates_render_or_fall_back() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        assert_eq!(format_release_date(Some(date)), "Mar 14, 2024");
        assert_eq!(format_release_date(None), "TBA");
    }

    #[test]
    fn timestamps_render_or_mark_drafts() {
        let ts = Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
        assert_eq!(format_timestamp(Some(ts)), "2025-06-01 09:30");
        assert_eq!(format_timestamp(None), "draft");
    }
}

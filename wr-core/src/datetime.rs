//! Conversions between `datetime-local` input values and UTC instants.

use chrono::{
    DateTime, Duration, LocalResult, NaiveDateTime, Offset, SecondsFormat, TimeZone, Timelike, Utc,
};

/// Formats accepted from a `datetime-local` input (minute or second precision).
const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Parse a `datetime-local` value such as `2024-03-01T08:30`.
pub fn parse_input(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Format a naive date-time back into the shortest `datetime-local` value.
pub fn format_input(value: &NaiveDateTime) -> String {
    if value.second() == 0 {
        value.format(INPUT_FORMATS[0]).to_string()
    } else {
        value.format(INPUT_FORMATS[1]).to_string()
    }
}

/// Interpret a wall-clock value in `tz` and convert it to UTC.
///
/// Ambiguous wall-clock times (DST fold) resolve to the earlier instant.
/// Times skipped by a DST gap are read with the offset in effect before the
/// gap, which moves them forward by the gap length (as browsers do).
pub fn local_to_utc<Tz: TimeZone>(value: &NaiveDateTime, tz: &Tz) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(value) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            let before = value.checked_sub_signed(Duration::days(1))?;
            let offset = match tz.offset_from_local_datetime(&before) {
                LocalResult::Single(offset) | LocalResult::Ambiguous(offset, _) => offset.fix(),
                LocalResult::None => return None,
            };
            let shift = Duration::seconds(i64::from(offset.local_minus_utc()));
            let utc = value.checked_sub_signed(shift)?;
            Some(Utc.from_utc_datetime(&utc))
        }
    }
}

/// Convenience for `parse_input` followed by `local_to_utc`.
pub fn input_to_utc<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    parse_input(value).and_then(|naive| local_to_utc(&naive, tz))
}

/// ISO 8601 with millisecond precision and a `Z` suffix.
pub fn to_iso(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Human readable UTC timestamp used by the terminal front end.
pub fn format_utc(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
pub(crate) mod testing {
    use chrono::{Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

    /// US Eastern around the 2024-03-10 spring-forward (02:00 EST -> 03:00 EDT).
    #[derive(Debug, Clone, Copy)]
    pub struct Eastern;

    impl Eastern {
        fn est() -> FixedOffset {
            FixedOffset::west_opt(5 * 3600).unwrap()
        }

        fn edt() -> FixedOffset {
            FixedOffset::west_opt(4 * 3600).unwrap()
        }

        fn switch_local() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2024, 3, 10)
                .unwrap()
                .and_hms_opt(2, 0, 0)
                .unwrap()
        }
    }

    impl TimeZone for Eastern {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            Eastern
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let switch = Self::switch_local();
            if *local < switch {
                LocalResult::Single(Self::est())
            } else if *local < switch + Duration::hours(1) {
                LocalResult::None
            } else {
                LocalResult::Single(Self::edt())
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if *utc < Self::switch_local() + Duration::hours(5) {
                Self::est()
            } else {
                Self::edt()
            }
        }
    }
}

//! # Souvenir Calendar
//!
//! Pure UTC conversions for souvenir time-stamping.
//!
//! Everything here is a function of its numeric inputs. No process
//! timezone, no clock reads, so results are identical on every host.

use chrono::{NaiveDate, TimeZone, Utc};

/// UTC timestamp for a calendar date and time of day.
///
/// # Panics
///
/// Panics on an impossible date or time of day. Callers pass
/// engine-controlled constants, so an invalid input is a programming
/// error.
#[must_use]
pub fn utc_timestamp(year: u16, month: u8, day: u8, hour: u8, min: u8, sec: u8) -> i64 {
    let date = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
        .expect("valid calendar date");
    let datetime = date
        .and_hms_opt(u32::from(hour), u32::from(min), u32::from(sec))
        .expect("valid time of day");
    Utc.from_utc_datetime(&datetime).timestamp()
}

/// First second of a year: `year-01-01T00:00:00Z`.
#[inline]
#[must_use]
pub fn start_of_year_timestamp(year: u16) -> i64 {
    utc_timestamp(year, 1, 1, 0, 0, 0)
}

/// Last second of a year: `year-12-31T23:59:59Z`.
#[inline]
#[must_use]
pub fn end_of_year_timestamp(year: u16) -> i64 {
    utc_timestamp(year, 12, 31, 23, 59, 59)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_year_starts_at_zero() {
        assert_eq!(start_of_year_timestamp(1970), 0);
    }

    #[test]
    fn test_known_timestamps() {
        // 2019-01-01T00:00:00Z
        assert_eq!(start_of_year_timestamp(2019), 1_546_300_800);
        // 2019-12-31T23:59:59Z
        assert_eq!(end_of_year_timestamp(2019), 1_577_836_799);
    }

    #[test]
    fn test_years_tile_the_timeline() {
        for year in [1970, 1999, 2000, 2019, 2020, 2038] {
            assert_eq!(
                end_of_year_timestamp(year) + 1,
                start_of_year_timestamp(year + 1)
            );
        }
    }

    #[test]
    fn test_leap_day_is_accepted() {
        let leap = utc_timestamp(2020, 2, 29, 12, 0, 0);
        assert!(leap > start_of_year_timestamp(2020));
        assert!(leap < end_of_year_timestamp(2020));
    }

    #[test]
    #[should_panic(expected = "valid calendar date")]
    fn test_impossible_date_panics() {
        let _ = utc_timestamp(2021, 2, 29, 0, 0, 0);
    }
}

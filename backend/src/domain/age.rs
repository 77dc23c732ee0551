//! Age derivation and age-band classification.
//!
//! Pure calendar math: services read the clock once per operation and
//! pass concrete dates in, so these rules stay directly testable.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

use crate::domain::catalog;
use crate::domain::models::milestone::AgeBand;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Classification of every catalog band relative to one age.
///
/// `current` is None when the age falls below the first band's start
/// or beyond the last band's end; `upcoming` is the first band whose
/// start is still ahead of the age; `past` holds every band already
/// aged out of.
#[derive(Debug, Clone, PartialEq)]
pub struct BandClassification {
    pub current: Option<&'static AgeBand>,
    pub upcoming: Option<&'static AgeBand>,
    pub past: Vec<&'static AgeBand>,
}

/// Age in whole months: calendar month difference, day-of-month ignored.
pub fn age_in_whole_months(birth: NaiveDate, today: NaiveDate) -> i32 {
    (today.year() - birth.year()) * 12 + (today.month() as i32 - birth.month() as i32)
}

/// Age in whole days: raw millisecond difference from midnight UTC of
/// the birth date, floored.
pub fn age_in_days(birth: NaiveDate, now: DateTime<Utc>) -> i64 {
    let birth_instant = birth.and_time(NaiveTime::MIN).and_utc();
    (now - birth_instant).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Classify all catalog bands for the given age. Bands are stored
/// sorted by start month, so the first band ahead of the age wins the
/// upcoming slot.
pub fn classify_bands(age_months: i32) -> BandClassification {
    let mut current = None;
    let mut upcoming = None;
    let mut past = Vec::new();

    for band in catalog::AGE_BANDS {
        if band.contains(age_months) {
            current = Some(band);
        } else if (band.start_month as i32) > age_months {
            if upcoming.is_none() {
                upcoming = Some(band);
            }
        } else {
            past.push(band);
        }
    }

    BandClassification { current, upcoming, past }
}

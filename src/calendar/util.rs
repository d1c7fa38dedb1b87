use super::CalendarError;
use chrono::{Datelike, Days, NaiveDate, Weekday};

pub(crate) fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::InvalidYear(year))
}

/// Décale `date` de `days` jours (négatif possible).
pub(crate) fn shift(date: NaiveDate, days: i64) -> Result<NaiveDate, CalendarError> {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.ok_or(CalendarError::InvalidYear(date.year()))
}

/// Premier jour `>= date` tombant sur `weekday`.
///
/// Numérotation lundi = 0 … dimanche = 6 ; le décalage reste dans [0, 6].
/// Mar. 15/11/2022, on cherche un mardi : 15/11/2022.
/// Mer. 16/11/2022, on cherche un mardi : 22/11/2022.
pub fn next_weekday_on_or_after(
    date: NaiveDate,
    weekday: Weekday,
) -> Result<NaiveDate, CalendarError> {
    let target = weekday.num_days_from_monday() as i64;
    let current = date.weekday().num_days_from_monday() as i64;
    shift(date, (target - current).rem_euclid(7))
}

/// 365 ou 366.
pub fn days_in_year(year: i32) -> Result<usize, CalendarError> {
    Ok(ymd(year, 12, 31)?.ordinal() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_weekday_is_idempotent() {
        let tue = date(2022, 11, 15);
        assert_eq!(next_weekday_on_or_after(tue, Weekday::Tue).unwrap(), tue);
    }

    #[test]
    fn moves_forward_within_a_week() {
        let wed = date(2022, 11, 16);
        assert_eq!(
            next_weekday_on_or_after(wed, Weekday::Tue).unwrap(),
            date(2022, 11, 22)
        );
        // dimanche → lundi : un seul jour, pas huit
        let sun = date(2024, 9, 1);
        assert_eq!(
            next_weekday_on_or_after(sun, Weekday::Mon).unwrap(),
            date(2024, 9, 2)
        );
        // lundi → dimanche : six jours
        let mon = date(2024, 9, 2);
        assert_eq!(
            next_weekday_on_or_after(mon, Weekday::Sun).unwrap(),
            date(2024, 9, 8)
        );
    }

    #[test]
    fn offset_property_over_a_year() {
        let mut d = date(2023, 1, 1);
        while d.year() == 2023 {
            for wd in [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ] {
                let next = next_weekday_on_or_after(d, wd).unwrap();
                assert_eq!(next.weekday(), wd);
                let offset = (next - d).num_days();
                assert!((0..=6).contains(&offset));
                assert_eq!(offset == 0, d.weekday() == wd);
            }
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn leap_years() {
        assert_eq!(days_in_year(2023).unwrap(), 365);
        assert_eq!(days_in_year(2024).unwrap(), 366);
        assert_eq!(days_in_year(1900).unwrap(), 365);
        assert_eq!(days_in_year(2000).unwrap(), 366);
    }

    #[test]
    fn shift_out_of_range_is_an_error() {
        assert_eq!(
            shift(NaiveDate::MAX, 1),
            Err(CalendarError::InvalidYear(NaiveDate::MAX.year()))
        );
        assert_eq!(shift(date(2024, 3, 31), -8).unwrap(), date(2024, 3, 23));
    }
}

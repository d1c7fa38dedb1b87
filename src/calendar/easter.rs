use super::util::ymd;
use super::CalendarError;
use chrono::NaiveDate;

/// Dimanche de Pâques grégorien selon Spencer Jones
/// (Meeus, Astronomical Algorithms, 2e éd., p. 67).
///
/// Division euclidienne : identique à la version classique pour `year >= 0`,
/// et donne encore une date valide (sans signification) avant l'an 0.
pub fn easter_sunday(year: i32) -> Result<NaiveDate, CalendarError> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let x = h + l - 7 * m + 114;
    let month = x / 31;
    let day = x % 31 + 1;
    ymd(year, month as u32, day as u32)
}

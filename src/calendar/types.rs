use chrono::NaiveDate;
use thiserror::Error;

/// Options de calcul
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarOptions {
    /// Première année soumise à la novelle BGBl. I Nr. 49/2019
    /// (mardi après Pâques et Pentecôte travaillés, vacances d'automne).
    pub reform_year: i32,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self { reform_year: 2020 }
    }
}

impl CalendarOptions {
    pub fn is_reformed(&self, year: i32) -> bool {
        year >= self.reform_year
    }
}

/// Dates pivots d'une année, calculées une seule fois.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchors {
    pub year: i32,
    pub easter_sunday: NaiveDate,
    pub semester_holiday_begin: NaiveDate,
    pub main_holiday_begin: NaiveDate,
    pub schoolyear_begin: NaiveDate,
    pub christmas_holiday_begin: NaiveDate,
    /// 1er janvier de l'année suivante (borne exclusive).
    pub next_year_begin: NaiveDate,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("invalid year: {0} is outside the representable date range")]
    InvalidYear(i32),
}

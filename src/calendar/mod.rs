mod easter;
pub mod rules;
mod types;
mod util;

pub use easter::easter_sunday;
pub use types::{Anchors, CalendarError, CalendarOptions};
pub use util::{days_in_year, next_weekday_on_or_after};

use crate::model::CalendarDay;
use chrono::{Datelike, NaiveDate, Weekday};
use util::{shift, ymd};

/// Calendrier d'une année : fériés légaux et vacances scolaires autrichiens.
#[derive(Debug, Clone, Copy)]
pub struct YearCalendar {
    year: i32,
    opts: CalendarOptions,
}

impl YearCalendar {
    /// Échoue si l'année (ou le 1er janvier suivant) sort de la plage de chrono.
    pub fn new(year: i32) -> Result<Self, CalendarError> {
        Self::with_options(year, CalendarOptions::default())
    }

    pub fn with_options(year: i32, opts: CalendarOptions) -> Result<Self, CalendarError> {
        ymd(year, 1, 1)?;
        ymd(year.checked_add(1).ok_or(CalendarError::InvalidYear(year))?, 1, 1)
            .map_err(|_| CalendarError::InvalidYear(year))?;
        Ok(Self { year, opts })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn options(&self) -> CalendarOptions {
        self.opts
    }

    fn date(&self, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
        ymd(self.year, month, day)
    }

    pub fn easter_sunday(&self) -> Result<NaiveDate, CalendarError> {
        easter_sunday(self.year)
    }

    pub fn christi_himmelfahrt(&self) -> Result<NaiveDate, CalendarError> {
        shift(self.easter_sunday()?, 39)
    }

    pub fn pfingst_sonntag(&self) -> Result<NaiveDate, CalendarError> {
        shift(self.easter_sunday()?, 49)
    }

    pub fn fronleichnam(&self) -> Result<NaiveDate, CalendarError> {
        shift(self.easter_sunday()?, 60)
    }

    /// Premier lundi à partir du 1er septembre.
    pub fn schoolyear_begin(&self) -> Result<NaiveDate, CalendarError> {
        next_weekday_on_or_after(self.date(9, 1)?, Weekday::Mon)
    }

    /// Premier lundi à partir du 1er février.
    pub fn semester_holiday_begin(&self) -> Result<NaiveDate, CalendarError> {
        next_weekday_on_or_after(self.date(2, 1)?, Weekday::Mon)
    }

    /// Premier samedi à partir du 28 juin.
    pub fn main_holiday_begin(&self) -> Result<NaiveDate, CalendarError> {
        next_weekday_on_or_after(self.date(6, 28)?, Weekday::Sat)
    }

    /// 23 décembre si c'est un lundi, sinon 24 décembre.
    pub fn christmas_holiday_begin(&self) -> Result<NaiveDate, CalendarError> {
        let dec23 = self.date(12, 23)?;
        if dec23.weekday() == Weekday::Mon {
            Ok(dec23)
        } else {
            self.date(12, 24)
        }
    }

    pub fn anchors(&self) -> Result<Anchors, CalendarError> {
        Ok(Anchors {
            year: self.year,
            easter_sunday: self.easter_sunday()?,
            semester_holiday_begin: self.semester_holiday_begin()?,
            main_holiday_begin: self.main_holiday_begin()?,
            schoolyear_begin: self.schoolyear_begin()?,
            christmas_holiday_begin: self.christmas_holiday_begin()?,
            next_year_begin: ymd(self.year + 1, 1, 1)?,
        })
    }

    /// Un `CalendarDay` par jour de l'année, dans l'ordre.
    pub fn calendar_days(&self) -> Result<Vec<CalendarDay>, CalendarError> {
        let anchors = self.anchors()?;
        #[cfg(feature = "logging")]
        tracing::debug!(
            year = self.year,
            easter = %anchors.easter_sunday,
            reformed = self.opts.is_reformed(self.year),
            "computing calendar year"
        );
        let days = rules::apply_rules(rules::RULES, &anchors, self.opts)?;
        #[cfg(feature = "logging")]
        tracing::debug!(
            year = self.year,
            days = days.len(),
            holidays = days.iter().filter(|d| d.is_public_holiday).count(),
            "calendar year computed"
        );
        Ok(days)
    }
}

/// Point d'entrée : calendrier annoté de `year` avec les options par défaut.
pub fn compute_calendar_year(year: i32) -> Result<Vec<CalendarDay>, CalendarError> {
    YearCalendar::new(year)?.calendar_days()
}

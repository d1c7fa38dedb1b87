#![forbid(unsafe_code)]
//! Ferien — jours fériés légaux et vacances scolaires autrichiens d'une année.
//!
//! - Calcul pur : une année en entrée, un `CalendarDay` par jour en sortie.
//! - Règles déclaratives appliquées par priorité (la première gagne).
//! - Export JSON/CSV et rendu texte en dehors du calcul.

pub mod calendar;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod report;

pub use calendar::{
    compute_calendar_year, days_in_year, easter_sunday, next_weekday_on_or_after, Anchors,
    CalendarError, CalendarOptions, YearCalendar,
};
pub use model::{CalendarDay, Period};
pub use report::{periods, render_periods, PeriodRenderer, TextPeriods};

//! Table des règles, appliquées dans l'ordre : la première règle qui touche
//! un jour le fixe définitivement.
//!
//! Arbeitsruhegesetz, § 7 (2) :
//! https://www.ris.bka.gv.at/GeltendeFassung.wxe?Abfrage=Bundesnormen&Gesetzesnummer=10008541
//! Schulzeitgesetz, § 2 :
//! https://www.ris.bka.gv.at/GeltendeFassung.wxe?Abfrage=Bundesnormen&Gesetzesnummer=10009575

use super::types::{Anchors, CalendarError, CalendarOptions};
use super::util::{shift, ymd};
use crate::model::CalendarDay;
use chrono::{Datelike, NaiveDate};

/// Date relative à l'année calculée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRef {
    Fixed { month: u32, day: u32 },
    /// Décalage en jours depuis le dimanche de Pâques.
    Easter(i64),
    /// Décalage depuis le début des vacances de semestre.
    SemesterHolidays(i64),
    MainHolidays,
    SchoolYear,
    ChristmasHolidays,
    /// 1er janvier de l'année suivante.
    NextYear,
}

impl DateRef {
    pub fn resolve(self, anchors: &Anchors) -> Result<NaiveDate, CalendarError> {
        match self {
            DateRef::Fixed { month, day } => ymd(anchors.year, month, day),
            DateRef::Easter(offset) => shift(anchors.easter_sunday, offset),
            DateRef::SemesterHolidays(offset) => shift(anchors.semester_holiday_begin, offset),
            DateRef::MainHolidays => Ok(anchors.main_holiday_begin),
            DateRef::SchoolYear => Ok(anchors.schoolyear_begin),
            DateRef::ChristmasHolidays => Ok(anchors.christmas_holiday_begin),
            DateRef::NextYear => Ok(anchors.next_year_begin),
        }
    }
}

/// Jours couverts par une règle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Day(DateRef),
    /// Intervalle [début, fin).
    Range(DateRef, DateRef),
    /// Tous les jours de l'année.
    WholeYear,
}

/// Applicabilité vis-à-vis de la novelle BGBl. I Nr. 49/2019.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Always,
    BeforeReform,
    SinceReform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Jour férié légal.
    Statutory,
    /// Dimanche de fête, toujours libre.
    AlwaysOff,
    /// Vacances et jours sans école.
    SchoolFree,
    /// Remplissage final : jours ordinaires.
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub kind: RuleKind,
    pub label: Option<&'static str>,
    pub span: Span,
    pub validity: Validity,
}

const fn fixed(month: u32, day: u32) -> DateRef {
    DateRef::Fixed { month, day }
}

const fn statutory(label: &'static str, at: DateRef) -> Rule {
    Rule {
        kind: RuleKind::Statutory,
        label: Some(label),
        span: Span::Day(at),
        validity: Validity::Always,
    }
}

const fn always_off(label: &'static str, at: DateRef) -> Rule {
    Rule {
        kind: RuleKind::AlwaysOff,
        label: Some(label),
        span: Span::Day(at),
        validity: Validity::Always,
    }
}

const fn school_free(label: &'static str, span: Span, validity: Validity) -> Rule {
    Rule {
        kind: RuleKind::SchoolFree,
        label: Some(label),
        span,
        validity,
    }
}

pub const RULES: &[Rule] = &[
    statutory("Neujahr", fixed(1, 1)),
    statutory("Heilige 3 Könige", fixed(1, 6)),
    statutory("Ostermontag", DateRef::Easter(1)),
    statutory("Staatsfeiertag", fixed(5, 1)),
    statutory("Christi Himmelfahrt", DateRef::Easter(39)),
    statutory("Pfingstmontag", DateRef::Easter(50)),
    statutory("Fronleichnam", DateRef::Easter(60)),
    statutory("Mariä Himmelfahrt", fixed(8, 15)),
    statutory("Nationalfeiertag", fixed(10, 26)),
    statutory("Allerheiligen", fixed(11, 1)),
    statutory("Mariä Empfängnis", fixed(12, 8)),
    statutory("Weihnachten", fixed(12, 25)),
    statutory("Stephanstag", fixed(12, 26)),
    always_off("Ostersonntag", DateRef::Easter(0)),
    always_off("Pfingstsonntag", DateRef::Easter(49)),
    school_free(
        "Weihnachtsferien",
        Span::Range(fixed(1, 2), fixed(1, 6)),
        Validity::Always,
    ),
    school_free(
        "Semesterferien",
        Span::Range(DateRef::SemesterHolidays(0), DateRef::SemesterHolidays(6)),
        Validity::Always,
    ),
    // BGBl. I Nr. 49/2019 : le mardi après Pâques et Pentecôte n'est plus libre.
    school_free(
        "Osterferien",
        Span::Range(DateRef::Easter(-8), DateRef::Easter(3)),
        Validity::BeforeReform,
    ),
    school_free(
        "Osterferien",
        Span::Range(DateRef::Easter(-8), DateRef::Easter(2)),
        Validity::SinceReform,
    ),
    school_free(
        "Pfingstferien",
        Span::Range(DateRef::Easter(48), DateRef::Easter(52)),
        Validity::BeforeReform,
    ),
    school_free(
        "Pfingstferien",
        Span::Range(DateRef::Easter(48), DateRef::Easter(51)),
        Validity::SinceReform,
    ),
    school_free(
        "Sommerferien",
        Span::Range(DateRef::MainHolidays, DateRef::SchoolYear),
        Validity::Always,
    ),
    school_free("Allerseelen", Span::Day(fixed(11, 2)), Validity::Always),
    school_free("Heiliger Leopold", Span::Day(fixed(11, 15)), Validity::Always),
    school_free(
        "Weihnachtsferien",
        Span::Range(DateRef::ChristmasHolidays, DateRef::NextYear),
        Validity::Always,
    ),
    // BGBl. I Nr. 49/2019 : vacances d'automne du 27/10 au 31/10.
    school_free(
        "Herbstferien",
        Span::Range(fixed(10, 27), fixed(11, 1)),
        Validity::SinceReform,
    ),
    Rule {
        kind: RuleKind::Fill,
        label: None,
        span: Span::WholeYear,
        validity: Validity::Always,
    },
];

impl Rule {
    pub fn applies(&self, year: i32, opts: CalendarOptions) -> bool {
        match self.validity {
            Validity::Always => true,
            Validity::BeforeReform => !opts.is_reformed(year),
            Validity::SinceReform => opts.is_reformed(year),
        }
    }

    /// Jours visés par la règle, en ordre croissant.
    pub fn dates(&self, anchors: &Anchors) -> Result<Vec<NaiveDate>, CalendarError> {
        let (begin, end) = match self.span {
            Span::Day(at) => {
                let d = at.resolve(anchors)?;
                return Ok(vec![d]);
            }
            Span::Range(begin, end) => (begin.resolve(anchors)?, end.resolve(anchors)?),
            Span::WholeYear => (ymd(anchors.year, 1, 1)?, anchors.next_year_begin),
        };
        Ok(begin.iter_days().take_while(|d| *d < end).collect())
    }

    pub fn make_day(&self, date: NaiveDate) -> CalendarDay {
        match (self.kind, self.label) {
            (RuleKind::Statutory, Some(label)) => CalendarDay::holiday(date, label),
            (_, Some(label)) => CalendarDay::off(date, label),
            (_, None) => CalendarDay::plain(date),
        }
    }
}

/// Applique `rules` dans l'ordre sur un tampon indexé par jour de l'année.
pub fn apply_rules(
    rules: &[Rule],
    anchors: &Anchors,
    opts: CalendarOptions,
) -> Result<Vec<CalendarDay>, CalendarError> {
    let first = ymd(anchors.year, 1, 1)?;
    let len = (anchors.next_year_begin - first).num_days() as usize;
    let mut slots: Vec<Option<CalendarDay>> = vec![None; len];

    for rule in rules.iter().filter(|r| r.applies(anchors.year, opts)) {
        for date in rule.dates(anchors)? {
            if date.year() != anchors.year {
                continue;
            }
            let slot = &mut slots[date.ordinal0() as usize];
            if slot.is_none() {
                *slot = Some(rule.make_day(date));
            }
        }
    }

    Ok(slots
        .into_iter()
        .zip(first.iter_days())
        .map(|(slot, date)| slot.unwrap_or_else(|| CalendarDay::plain(date)))
        .collect())
}

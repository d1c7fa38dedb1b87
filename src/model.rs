use chrono::{Datelike, NaiveDate};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification d'un jour de l'année.
///
/// Un jour férié légal porte toujours un libellé non vide : les constructeurs
/// garantissent cet invariant, les champs restent publics pour la lecture.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDay {
    pub date: NaiveDate,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_public_holiday: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub label: Option<String>,
}

impl CalendarDay {
    /// Jour férié légal (Arbeitsruhegesetz).
    pub fn holiday<S: Into<String>>(date: NaiveDate, label: S) -> Self {
        Self {
            date,
            is_public_holiday: true,
            label: Some(label.into()),
        }
    }

    /// Jour libre (vacances, dimanche de fête) sans être férié.
    pub fn off<S: Into<String>>(date: NaiveDate, label: S) -> Self {
        Self {
            date,
            is_public_holiday: false,
            label: Some(label.into()),
        }
    }

    /// Jour ouvré ordinaire, sans libellé.
    pub fn plain(date: NaiveDate) -> Self {
        Self {
            date,
            is_public_holiday: false,
            label: None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }

    /// Vrai pour un jour sans aucune annotation.
    pub fn is_plain(&self) -> bool {
        !self.is_public_holiday && self.label().is_none()
    }

    /// Index 0-based dans le tableau annuel.
    pub fn day_of_year0(&self) -> usize {
        self.date.ordinal0() as usize
    }
}

/// Période continue de jours partageant le même libellé (bornes incluses).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Period {
    pub label: Option<String>,
    pub is_public_holiday: bool,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Nombre de jours couverts.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

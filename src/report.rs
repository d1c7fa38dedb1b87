use crate::model::{CalendarDay, Period};
use chrono::Duration;

/// Regroupe les jours annotés consécutifs de même libellé en périodes.
///
/// Les jours ordinaires ne produisent pas de période ; un jour férié au
/// milieu de vacances coupe la période en deux.
pub fn periods(days: &[CalendarDay]) -> Vec<Period> {
    let mut out: Vec<Period> = Vec::new();
    for day in days.iter().filter(|d| !d.is_plain()) {
        if let Some(last) = out.last_mut() {
            let contiguous = last.end + Duration::days(1) == day.date;
            if contiguous
                && last.is_public_holiday == day.is_public_holiday
                && last.label.as_deref() == day.label()
            {
                last.end = day.date;
                continue;
            }
        }
        out.push(Period {
            label: day.label().map(str::to_owned),
            is_public_holiday: day.is_public_holiday,
            start: day.date,
            end: day.date,
        });
    }
    out
}

/// Permet de customiser le rendu d'une période (texte, tableau, etc.).
pub trait PeriodRenderer {
    fn render(&self, period: &Period) -> String;
}

/// Une ligne par période : `début..fin  libellé`, `*` pour un férié légal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextPeriods;

impl PeriodRenderer for TextPeriods {
    fn render(&self, period: &Period) -> String {
        let span = if period.start == period.end {
            period.start.to_string()
        } else {
            format!("{}..{}", period.start, period.end)
        };
        let mark = if period.is_public_holiday { '*' } else { ' ' };
        format!(
            "{span:<22}{mark} {label}",
            label = period.label.as_deref().unwrap_or("")
        )
    }
}

pub fn render_periods(days: &[CalendarDay], renderer: &dyn PeriodRenderer) -> String {
    periods(days)
        .iter()
        .map(|p| renderer.render(p) + "\n")
        .collect()
}

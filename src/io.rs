use crate::model::CalendarDay;
use anyhow::Context;
use chrono::Datelike;
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Export JSON des jours (jolie mise en forme)
pub fn export_days_json<P: AsRef<Path>>(path: P, days: &[CalendarDay]) -> anyhow::Result<()> {
    let json = serde_json::to_vec_pretty(days)?;
    write_atomic(path.as_ref(), &json)
}

/// Export CSV: header `date,day_of_year,weekday,public_holiday,label`
pub fn export_days_csv<P: AsRef<Path>>(path: P, days: &[CalendarDay]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    w.write_record(["date", "day_of_year", "weekday", "public_holiday", "label"])?;
    let mut ordinal = itoa::Buffer::new();
    for d in days {
        let date = d.date.to_string();
        let weekday = d.date.weekday().to_string();
        w.write_record([
            date.as_str(),
            ordinal.format(d.date.ordinal()),
            weekday.as_str(),
            if d.is_public_holiday { "true" } else { "false" },
            d.label().unwrap_or(""),
        ])?;
    }
    let data = w
        .into_inner()
        .map_err(|e| e.into_error())
        .context("flushing csv buffer")?;
    write_atomic(path.as_ref(), &data)
}

/// Relit un export JSON.
pub fn import_days_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<CalendarDay>> {
    let path = path.as_ref();
    let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let days: Vec<CalendarDay> = serde_json::from_slice(&data)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(days)
}

/// Écrit dans un fichier temporaire voisin puis renomme.
fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}

#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use ferien::{
    io,
    report::{render_periods, TextPeriods},
    CalendarOptions, YearCalendar,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste : fériés et vacances scolaires autrichiens
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Première année appliquant la novelle BGBl. I Nr. 49/2019
    #[arg(long, global = true, default_value_t = 2020)]
    reform_year: i32,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lister tous les jours de l'année, et optionnellement exporter
    Days {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Lister les jours fériés légaux
    Holidays {
        #[arg(long)]
        year: i32,
    },

    /// Lister les périodes (vacances, fériés) regroupées
    Periods {
        #[arg(long)]
        year: i32,
    },

    /// Afficher les dates pivots (Pâques, rentrée, vacances)
    Anchors {
        #[arg(long)]
        year: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let opts = CalendarOptions {
        reform_year: cli.reform_year,
    };
    let calendar = |year: i32| {
        YearCalendar::with_options(year, opts).with_context(|| format!("year {year}"))
    };

    match cli.cmd {
        Commands::Days {
            year,
            out_json,
            out_csv,
        } => {
            let days = calendar(year)?.calendar_days()?;
            if let Some(path) = out_json {
                io::export_days_json(&path, &days)
                    .with_context(|| format!("exporting {path}"))?;
            }
            if let Some(path) = out_csv {
                io::export_days_csv(&path, &days).with_context(|| format!("exporting {path}"))?;
            }
            for d in &days {
                println!(
                    "{} | {} | {} | {}",
                    d.date,
                    d.date.weekday(),
                    if d.is_public_holiday { "*" } else { " " },
                    d.label().unwrap_or("-")
                );
            }
        }
        Commands::Holidays { year } => {
            let days = calendar(year)?.calendar_days()?;
            for d in days.iter().filter(|d| d.is_public_holiday) {
                println!("{} {}", d.date, d.label().unwrap_or(""));
            }
        }
        Commands::Periods { year } => {
            let days = calendar(year)?.calendar_days()?;
            print!("{}", render_periods(&days, &TextPeriods));
        }
        Commands::Anchors { year } => {
            let cal = calendar(year)?;
            let a = cal.anchors()?;
            println!("Ostersonntag:        {}", a.easter_sunday);
            println!("Christi Himmelfahrt: {}", cal.christi_himmelfahrt()?);
            println!("Pfingstsonntag:      {}", cal.pfingst_sonntag()?);
            println!("Fronleichnam:        {}", cal.fronleichnam()?);
            println!("Semesterferien:      {}", a.semester_holiday_begin);
            println!("Sommerferien:        {}", a.main_holiday_begin);
            println!("Schulbeginn:         {}", a.schoolyear_begin);
            println!("Weihnachtsferien:    {}", a.christmas_holiday_begin);
        }
    }

    Ok(())
}

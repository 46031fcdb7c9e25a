use anyhow::{Context, Result};
use birthdays::{BirthDate, card, parse_iso_date, upcoming_birthdays};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "birthdays",
    version,
    about = "Upcoming birthdays, ages and zodiac signs"
)]
struct Cli {
    #[arg(
        required = true,
        value_name = "NAME=YYYY-MM-DD",
        value_parser = parse_entry,
        help = "Person and date of birth"
    )]
    entries: Vec<(String, BirthDate)>,
    #[arg(
        long,
        env = "BIRTHDAYS_TODAY",
        value_name = "YYYY-MM-DD",
        value_parser = parse_iso_date,
        help = "Reference day (defaults to the local date)"
    )]
    today: Option<NaiveDate>,
    #[arg(long, help = "Keep only names containing this text (case-insensitive)")]
    search: Option<String>,
    #[arg(long, help = "Show only the next N birthdays")]
    limit: Option<usize>,
    #[arg(long, help = "Output machine-readable JSON")]
    json: bool,
}

fn parse_entry(raw: &str) -> std::result::Result<(String, BirthDate), String> {
    let (name, date) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=YYYY-MM-DD, got {raw:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in {raw:?}"));
    }
    let birth = date.trim().parse::<BirthDate>().map_err(|e| e.to_string())?;
    Ok((name.to_string(), birth))
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("birthdays=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // The only place the clock is read.
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    tracing::info!(%today, entries = cli.entries.len(), "computing birthdays");

    let summaries = upcoming_birthdays(cli.entries, today, cli.search.as_deref(), cli.limit)
        .context("failed to compute birthdays")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summaries).context("failed to encode JSON")?
        );
    } else {
        print!("{}", card::render_cards(&summaries));
    }

    Ok(())
}

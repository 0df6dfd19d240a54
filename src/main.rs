use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use exactage::compute_age;

/// Shown whenever no age could be calculated.
const PLACEHOLDER: &str = "Enter a date of birth to calculate an age.";

#[derive(Parser, Debug)]
#[command(name = "exactage", version, about = "Exact age in years, months and days")]
struct Cli {
    /// Date of birth, ISO format (YYYY-MM-DD)
    dob: Option<String>,

    /// Reference date to measure against instead of the current date
    #[arg(long, value_name = "DATE")]
    today: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let birthdate = cli.dob.as_deref().map(parse_date).transpose()?;

    // Captured once per invocation so the whole calculation sees a single
    // reference date.
    let today = match cli.today.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => Utc::now().date_naive(),
    };

    match compute_age(birthdate, today) {
        Ok(age) => println!("Your exact age is: {age}."),
        Err(err) => {
            eprintln!("{err}");
            println!("{PLACEHOLDER}");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("not a valid YYYY-MM-DD date: {raw}"))
}

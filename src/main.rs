use std::io;
use std::path::PathBuf;

use tracing::info;

use vacancy::engine::Engine;
use vacancy::{input, shell};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let (hotels_path, bookings_path) = parse_args()?;

    let hotels = input::load_hotels(&hotels_path)?;
    let bookings = input::load_bookings(&bookings_path)?;
    info!(
        hotels = hotels.len(),
        bookings = bookings.len(),
        "input loaded"
    );

    let engine = Engine::build(&hotels, &bookings);

    let today = chrono::Local::now().date_naive();
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&engine, today, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// `--hotels <path> --bookings <path>`, with `VACANCY_HOTELS` and
/// `VACANCY_BOOKINGS` as fallbacks.
fn parse_args() -> Result<(PathBuf, PathBuf), String> {
    let mut hotels = std::env::var("VACANCY_HOTELS").ok();
    let mut bookings = std::env::var("VACANCY_BOOKINGS").ok();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--hotels" => hotels = Some(args.next().ok_or("--hotels requires a path")?),
            "--bookings" => bookings = Some(args.next().ok_or("--bookings requires a path")?),
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    match (hotels, bookings) {
        (Some(h), Some(b)) => Ok((PathBuf::from(h), PathBuf::from(b))),
        _ => Err("usage: vacancy --hotels <hotels.json> --bookings <bookings.json>".into()),
    }
}

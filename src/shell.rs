use std::io::{BufRead, Write};

use crate::engine::{Engine, Run, parse_stay_date};
use crate::model::Night;

/// Parsed command from operator input.
///
/// The tagged variant is decided once here; the query layer dispatches on a
/// closed set of handlers and never re-inspects the raw text.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Availability {
        hotel_id: String,
        /// First and last night of stay, both inclusive. Equal for a
        /// single-night query.
        first_night: Night,
        last_night: Night,
        room_type: String,
    },
    Search {
        hotel_id: String,
        days_ahead: u32,
        room_type: String,
    },
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let trimmed = line.trim();
    let (name, rest) = trimmed
        .split_once('(')
        .ok_or(CommandError::Malformed)?;
    let args = rest
        .strip_suffix(')')
        .ok_or(CommandError::Malformed)?;
    let args: Vec<&str> = args.split(',').map(str::trim).collect();

    match name.trim().to_ascii_lowercase().as_str() {
        "availability" => {
            if args.len() != 3 {
                return Err(CommandError::WrongArity("Availability", 3, args.len()));
            }
            let (first_night, last_night) = parse_night_range(args[1])?;
            Ok(Command::Availability {
                hotel_id: args[0].to_string(),
                first_night,
                last_night,
                room_type: args[2].to_string(),
            })
        }
        "search" => {
            if args.len() != 3 {
                return Err(CommandError::WrongArity("Search", 3, args.len()));
            }
            let days_ahead = args[1]
                .parse()
                .map_err(|_| CommandError::BadHorizon(args[1].to_string()))?;
            Ok(Command::Search {
                hotel_id: args[0].to_string(),
                days_ahead,
                room_type: args[2].to_string(),
            })
        }
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// A date argument is either one night or an inclusive `start-end` range.
/// Dashed dates contain `-` themselves, so try every split point until both
/// halves parse.
fn parse_night_range(raw: &str) -> Result<(Night, Night), CommandError> {
    if let Some(night) = parse_stay_date(raw) {
        return Ok((night, night));
    }
    for (i, _) in raw.match_indices('-') {
        if let (Some(first), Some(last)) =
            (parse_stay_date(&raw[..i]), parse_stay_date(&raw[i + 1..]))
        {
            return Ok((first, last));
        }
    }
    Err(CommandError::BadRange(raw.to_string()))
}

// ── Session loop ──────────────────────────────────────────────

/// Drive one interactive session: read commands line by line until a blank
/// line or end of input, answering each on its own output line. Command
/// failures are reported and the loop continues; only output I/O errors
/// propagate.
pub fn run<R: BufRead, W: Write>(
    engine: &Engine,
    today: Night,
    input: R,
    mut output: W,
) -> std::io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        match execute(engine, today, &line) {
            Ok(answer) => writeln!(output, "{answer}")?,
            Err(e) => writeln!(output, "error: {e}")?,
        }
        output.flush()?;
    }
    Ok(())
}

/// Parse and dispatch one command. Every failure surfaces here as the
/// session's error line; nothing escapes past this boundary.
fn execute(
    engine: &Engine,
    today: Night,
    line: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    match parse_command(line)? {
        Command::Availability {
            hotel_id,
            first_night,
            last_night,
            room_type,
        } => {
            // Inclusive last night → exclusive bound; saturates at the
            // calendar edge.
            let end_exclusive = last_night.succ_opt().unwrap_or(Night::MAX);
            let available =
                engine.availability(&hotel_id, &room_type, first_night, end_exclusive)?;
            Ok(available.to_string())
        }
        Command::Search {
            hotel_id,
            days_ahead,
            room_type,
        } => {
            let runs = engine.search(&hotel_id, &room_type, days_ahead, today)?;
            Ok(format_runs(&runs))
        }
    }
}

/// `(20240101-20240103, 2), (20240107-20240110, 1)` — or the empty string
/// when no positive run exists.
fn format_runs(runs: &[Run]) -> String {
    runs.iter()
        .map(|run| {
            format!(
                "({}-{}, {})",
                run.start.format("%Y%m%d"),
                run.end.format("%Y%m%d"),
                run.min_available
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Errors ────────────────────────────────────────────────────

#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    Malformed,
    Unknown(String),
    WrongArity(&'static str, usize, usize),
    BadRange(String),
    BadHorizon(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Malformed => write!(f, "malformed command"),
            CommandError::Unknown(name) => write!(f, "unknown command: {name}"),
            CommandError::WrongArity(cmd, expected, got) => {
                write!(f, "{cmd}: expected {expected} arguments, got {got}")
            }
            CommandError::BadRange(raw) => write!(f, "bad date or range: {raw}"),
            CommandError::BadHorizon(raw) => write!(f, "bad horizon: {raw}"),
        }
    }
}

impl std::error::Error for CommandError {}

//! Konsolen-Eingabe des Headless-Clients.
//!
//! Parst eine Zeile und mappt sie auf einen `AppIntent`.

use crate::app::AppIntent;
use crate::core::GeoPoint;
use thiserror::Error;

/// Hilfetext für `help`.
pub const HELP_TEXT: &str = "\
Commands:
  click <lat> <lon>         choose start, then destination (third click restarts)
  locate <lat> <lon>        report the device location
  nolocate [reason]         geolocation unavailable, use the default start
  clear                     reset points and routes
  directions <from> | <to>  resolve two place names and fetch routes
  select <index>            select a route from the list
  help                      show this help
  quit                      exit";

/// Ergebnis einer gelesenen Zeile.
#[derive(Debug, Clone)]
pub enum ConsoleInput {
    /// Eingabe wird als Intent verarbeitet
    Intent(AppIntent),
    /// Hilfe anzeigen
    Help,
}

/// Nicht verwertbare Eingabezeile.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsoleError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

/// Parst eine Eingabezeile. Leere Zeilen ergeben `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ConsoleInput>, ConsoleError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim()));

    let input = match command.to_ascii_lowercase().as_str() {
        "click" => ConsoleInput::Intent(AppIntent::MapClicked {
            point: parse_point(rest, "click <lat> <lon>")?,
        }),
        "locate" => ConsoleInput::Intent(AppIntent::LocationAcquired {
            point: parse_point(rest, "locate <lat> <lon>")?,
        }),
        "nolocate" => ConsoleInput::Intent(AppIntent::LocationUnavailable {
            reason: if rest.is_empty() {
                "not supported".to_string()
            } else {
                rest.to_string()
            },
        }),
        "clear" => ConsoleInput::Intent(AppIntent::ClearRequested),
        "directions" => {
            let (from, to) = rest
                .split_once('|')
                .ok_or(ConsoleError::Usage("directions <from> | <to>"))?;
            ConsoleInput::Intent(AppIntent::DirectionsSubmitted {
                from: from.trim().to_string(),
                to: to.trim().to_string(),
            })
        }
        "select" => {
            let index = rest
                .parse::<i64>()
                .map_err(|_| ConsoleError::InvalidNumber(rest.to_string()))?;
            ConsoleInput::Intent(AppIntent::RouteSelected { index })
        }
        "help" | "?" => ConsoleInput::Help,
        "quit" | "exit" => ConsoleInput::Intent(AppIntent::ExitRequested),
        other => return Err(ConsoleError::UnknownCommand(other.to_string())),
    };

    Ok(Some(input))
}

fn parse_point(args: &str, usage: &'static str) -> Result<GeoPoint, ConsoleError> {
    let mut parts = args.split(|c: char| c.is_whitespace() || c == ',').filter(|p| !p.is_empty());
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ConsoleError::Usage(usage));
    };
    let number = |text: &str| {
        text.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ConsoleError::InvalidNumber(text.to_string()))
    };
    Ok(GeoPoint::new(number(lat)?, number(lon)?))
}

#[cfg(test)]
mod tests;

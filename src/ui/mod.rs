//! Eingabe-Layer des Headless-Clients.

pub mod console;

pub use console::{parse_line, ConsoleError, ConsoleInput, HELP_TEXT};

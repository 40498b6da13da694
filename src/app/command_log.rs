//! Spur der in einer Kartensitzung ausgeführten Commands.
//!
//! Der Controller schreibt jeden Command vor dem Handler mit, auch wenn der
//! Handler danach fehlschlägt oder eine veraltete Antwort verwirft.
//! `Session::run` fasst die Spur beim Sitzungsende im Debug-Log zusammen.
//! Flow-Tests prüfen darüber, welche Commands ein Intent ausgelöst hat.

use super::AppCommand;

/// Zuletzt ausgeführte Commands, älteste zuerst.
///
/// Hält höchstens `MAX_ENTRIES` Einträge; `total` zählt auch verworfene mit.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    total: usize,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
    /// Anzahl der Einträge, die `log_summary` ausgibt.
    const SUMMARY_TAIL: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Schreibt einen Command mit. Ist die Spur voll, fällt die ältere Hälfte weg.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
        self.total += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl aller mitgeschriebenen Commands der Sitzung, inklusive verworfener.
    pub fn total_recorded(&self) -> usize {
        self.total
    }

    /// Gehaltene Einträge, älteste zuerst.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Gibt Gesamtzahl und die letzten Commands auf Debug-Level aus.
    pub fn log_summary(&self) {
        let tail_start = self.entries.len().saturating_sub(Self::SUMMARY_TAIL);
        log::debug!(
            "Sitzung mit {} Commands beendet, zuletzt: {:?}",
            self.total,
            &self.entries[tail_start..]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;

    #[test]
    fn full_log_drops_oldest_half_but_keeps_counting() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(&AppCommand::ClearSession);
        }
        log.record(&AppCommand::RequestExit);

        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert_eq!(log.total_recorded(), CommandLog::MAX_ENTRIES + 1);
        assert!(matches!(log.last(), Some(AppCommand::RequestExit)));
    }

    #[test]
    fn last_reflects_most_recent_click() {
        let mut log = CommandLog::new();
        assert!(log.last().is_none());

        let point = GeoPoint::new(28.61, 77.20);
        log.record(&AppCommand::SelectPoint { point });

        assert!(matches!(log.last(), Some(AppCommand::SelectPoint { point: p }) if *p == point));
        assert_eq!(log.total_recorded(), 1);
    }
}

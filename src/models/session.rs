use std::fmt;

use uuid::Uuid;

use crate::config::DF;
use crate::models::TrackedInstrument;

/// Opaque identifier of one dashboard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The first block is plenty for a status line
        let full = self.0.simple().to_string();
        f.write_str(&full[..8])
    }
}

/// Append-only list of everything tracked in this session, oldest first.
/// Lives as long as the app; nothing is written to disk.
#[derive(Debug, Default)]
pub struct SessionStore {
    id: SessionId,
    entries: Vec<TrackedInstrument>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn append(&mut self, instrument: TrackedInstrument) {
        if DF.log_session {
            log::info!(
                "Session {}: tracking {} as {} ({} entries)",
                self.id,
                instrument.ticker(),
                instrument.params().mode(),
                self.entries.len() + 1
            );
        }
        self.entries.push(instrument);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TrackedInstrument> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry that carries a payoff chart
    pub fn latest_payoff(&self) -> Option<&TrackedInstrument> {
        self.entries.iter().rev().find(|e| e.payoff_figure().is_some())
    }
}

use super::sequence::DrawSequence;
use crate::error::{DrawError, Result};
use crate::storage::RevealLog;
use crate::types::{LogRecord, Revealed};

/// Progress through the active draw sequence.
///
/// `position` counts revealed entries and stays within `0..=sequence.len()`.
#[derive(Debug, Clone)]
pub struct DrawCursor {
    sequence: DrawSequence,
    position: usize,
}

impl DrawCursor {
    pub fn new(sequence: DrawSequence) -> Self {
        Self {
            sequence,
            position: 0,
        }
    }

    pub fn sequence(&self) -> &DrawSequence {
        &self.sequence
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.sequence.len() - self.position
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.sequence.len()
    }

    /// Most recently revealed entry, if any
    pub fn current(&self) -> Option<Revealed> {
        self.revealed_at(self.position)
    }

    /// Disclose the next entry and log it. The cursor only moves once the
    /// log write succeeded.
    pub fn reveal<L: RevealLog + ?Sized>(&mut self, log: &mut L) -> Result<Revealed> {
        if self.is_complete() {
            return Err(DrawError::SequenceExhausted);
        }

        let revealed = self
            .revealed_at(self.position + 1)
            .ok_or_else(|| DrawError::internal("Cursor out of range"))?;
        log.append(&LogRecord::from_revealed(&revealed))?;
        self.position += 1;

        tracing::info!(
            "Revealed #{}/{}: {} ({}) wins {}",
            revealed.index,
            self.sequence.len(),
            revealed.entry.name,
            revealed.entry.identity_code,
            revealed.entry.prize
        );
        Ok(revealed)
    }

    /// Step back one reveal and return the entry before it. Refused until at
    /// least two entries have been revealed. The log is left untouched.
    pub fn undo(&mut self) -> Result<Revealed> {
        if self.position <= 1 {
            return Err(DrawError::NothingToUndo);
        }

        self.position -= 1;
        let revealed = self
            .revealed_at(self.position)
            .ok_or_else(|| DrawError::internal("Cursor out of range"))?;

        tracing::debug!(
            "Undo: back to #{} {} ({})",
            revealed.index,
            revealed.entry.name,
            revealed.entry.identity_code
        );
        Ok(revealed)
    }

    /// Swap in a fresh sequence and clear the log. The log is truncated
    /// first so a failed write keeps the current draw.
    pub fn reset<L: RevealLog + ?Sized>(
        &mut self,
        sequence: DrawSequence,
        log: &mut L,
    ) -> Result<()> {
        log.truncate()?;
        self.sequence = sequence;
        self.position = 0;
        Ok(())
    }

    fn revealed_at(&self, index: usize) -> Option<Revealed> {
        let entry = self.sequence.get(index.checked_sub(1)?)?;
        Some(Revealed {
            index,
            entry: entry.clone(),
        })
    }
}

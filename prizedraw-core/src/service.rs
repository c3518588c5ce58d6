use crate::config::DrawConfig;
use crate::draw::{generate, DrawCursor, DrawSequence, PrizeTable};
use crate::error::Result;
use crate::participants;
use crate::storage::DrawLog;
use crate::types::{Participant, Revealed};
use parking_lot::Mutex;
use serde::Serialize;
use uuid::Uuid;

/// Owns the pool, the active sequence and its cursor, and the draw log.
///
/// Reveal, undo and reset are serialized through a single lock so the
/// cursor, the sequence and the log always change together.
pub struct DrawService {
    config: DrawConfig,
    pool: Vec<Participant>,
    prizes: PrizeTable,
    state: Mutex<DrawState>,
}

struct DrawState {
    cursor: DrawCursor,
    log: DrawLog,
}

/// Read-only progress summary
#[derive(Debug, Clone, Serialize)]
pub struct DrawStatus {
    pub total: usize,
    pub revealed: usize,
    pub remaining: usize,
    pub sequence_id: Uuid,
    pub fingerprint: String,
}

impl DrawService {
    pub fn new(config: DrawConfig, pool: Vec<Participant>) -> Result<Self> {
        config.validate()?;
        let prizes = PrizeTable::from_bands(&config.ranked_bands)?;
        let sequence = generate(&pool, &prizes, &config.grand_winners, config.shortfall)?;
        let log = DrawLog::new(&config.log_path);

        Ok(Self {
            config,
            pool,
            prizes,
            state: Mutex::new(DrawState {
                cursor: DrawCursor::new(sequence),
                log,
            }),
        })
    }

    /// Load participants from the configured CSV and build the service
    pub fn from_config(config: DrawConfig) -> Result<Self> {
        config.validate()?;
        let pool = participants::load_csv(&config.participants_path)?;
        Self::new(config, pool)
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    pub fn pool(&self) -> &[Participant] {
        &self.pool
    }

    /// Length of the active sequence
    pub fn total(&self) -> usize {
        self.state.lock().cursor.sequence().len()
    }

    pub fn status(&self) -> DrawStatus {
        let state = self.state.lock();
        let sequence = state.cursor.sequence();
        DrawStatus {
            total: sequence.len(),
            revealed: state.cursor.position(),
            remaining: state.cursor.remaining(),
            sequence_id: sequence.id(),
            fingerprint: sequence.fingerprint(),
        }
    }

    pub fn reveal(&self) -> Result<Revealed> {
        let mut state = self.state.lock();
        let DrawState { cursor, log } = &mut *state;
        cursor.reveal(log)
    }

    pub fn undo(&self) -> Result<Revealed> {
        self.state.lock().cursor.undo()
    }

    /// Reshuffle the pool, rewind to the start and clear the log
    pub fn reset(&self) -> Result<()> {
        let sequence = self.generate_sequence()?;
        let sequence_id = sequence.id();

        let mut state = self.state.lock();
        let DrawState { cursor, log } = &mut *state;
        cursor.reset(sequence, log)?;

        tracing::info!("Draw reset; active sequence is now {}", sequence_id);
        Ok(())
    }

    /// A fresh sequence from the pool, independent of the active one
    pub fn generate_sequence(&self) -> Result<DrawSequence> {
        generate(
            &self.pool,
            &self.prizes,
            &self.config.grand_winners,
            self.config.shortfall,
        )
    }

    pub fn export_log(&self) -> Result<Vec<u8>> {
        self.state.lock().log.export()
    }

    pub fn log_file_name(&self) -> String {
        self.state.lock().log.file_name()
    }
}

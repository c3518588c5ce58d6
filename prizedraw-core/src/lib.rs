//! prizedraw core - participant pool, prize sequencing and the reveal cursor
//!
//! Loads and deduplicates participants, shuffles them into a ranked draw with
//! prizes assigned by band, appends the fixed grand winners, and walks the
//! result one reveal at a time while recording every disclosure to a CSV log.

pub mod config;
pub mod draw;
pub mod error;
pub mod participants;
pub mod service;
pub mod storage;
pub mod types;

pub use config::{DrawConfig, PrizeBand, ShortfallPolicy};
pub use draw::{DrawCursor, DrawSequence, PrizeTable};
pub use error::{DrawError, Result};
pub use service::{DrawService, DrawStatus};
pub use storage::{DrawLog, RevealLog};
pub use types::{DrawEntry, LogRecord, Participant, PrizeTag, Revealed};

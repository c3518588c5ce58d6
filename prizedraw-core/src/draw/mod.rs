pub mod bands;
pub mod cursor;
pub mod sequence;

pub use bands::PrizeTable;
pub use cursor::DrawCursor;
pub use sequence::{generate, generate_with_rng, DrawSequence};

pub mod check;
pub mod preview;
pub mod serve;

pub use check::handle_check_command;
pub use preview::handle_preview_command;
pub use serve::handle_serve_command;

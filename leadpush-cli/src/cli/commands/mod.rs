//! Command handlers

pub mod preview;
pub mod send;

pub use preview::handle_preview_command;
pub use send::handle_send_command;

//! User-facing messages.
//!
//! Every string the CLI prints lives in [`Message`] and its `Display`
//! implementation; the `msg_*` macros decide whether it goes to the terminal
//! or to `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

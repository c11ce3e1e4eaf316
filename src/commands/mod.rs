//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the library components to perform user tasks.

pub mod query;
pub mod relay;
pub mod send;
pub mod utils;

// Re-export main command functions
pub use query::{execute_query, QueryArgs, QueryKind};
pub use relay::{execute_relay, RelayArgs};
pub use send::{execute_send, validate_args, SendArgs};
pub use utils::{connect, display_version, format_wei};

//! Syntactic checks for user-supplied input.
//!
//! Everything here is pure: no I/O, no panics. Query methods run these
//! checks before touching the network.

pub mod format;
pub mod tag;

pub use format::{is_valid_address, is_valid_hex, require_address, strip_hex_prefix};
pub use tag::{ConfirmationTag, IntoTag};

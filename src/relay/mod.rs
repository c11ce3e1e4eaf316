//! Loopring relay methods.
//!
//! Thin typed wrappers: validate addresses, shape the positional params,
//! return the relay's `result` untouched.

pub mod filters;
pub mod methods;

pub use filters::{FillFilter, RingMinedFilter};
pub use methods::{cancel_loopring_order, RelayMethod};

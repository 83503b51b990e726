//! Payment checkout bridge.
//!
//! The hosted checkout page runs inside a web view and reports its outcome
//! through `postMessage` as small JSON objects. This module decodes those
//! messages and routes them to native handlers.

mod events;
mod order;

pub use events::{CheckoutEvent, CheckoutHandler, DEFAULT_FAILURE_MESSAGE, decode_event, dispatch};
pub use order::CheckoutOrder;

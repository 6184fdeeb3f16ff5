//! Pure data structures managed by the order store.

pub mod order;

pub use order::*;

//! User-facing configuration: the limits store.

pub mod limits;

//! Domain types and errors for the explorer core.

pub mod errors;
pub mod model;

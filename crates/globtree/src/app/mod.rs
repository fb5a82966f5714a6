//! Application layer orchestrating domain logic and infrastructure.

pub mod explorer;
pub mod pattern;
pub mod scan;
pub mod tree;

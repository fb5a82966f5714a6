//! Infrastructure adapters for configuration and IO concerns.

pub mod config;

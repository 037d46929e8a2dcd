//! # Domain Models
//!
//! Pure configuration types for the settings pusher, with `serde` as the only dependency.
//! Keep it lean: no I/O or process handling, just data and built-in defaults.

pub mod config;

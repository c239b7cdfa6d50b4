//! # Armory Development Tools
//!
//! Command-line tools for development:
//! - Production config validation
//! - Headless draw simulation
//! - Snapshot inspection

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod inspect;
pub mod simulate;
pub mod validate;

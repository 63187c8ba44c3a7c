#![forbid(unsafe_code)]

//! Headless driver for the Omnioktagram widget.
//!
//! - [`script`]: JSON-lines input scripts and their deterministic replay.
//! - [`settings`]: environment-driven harness configuration.

pub mod script;
pub mod settings;

//! quicktab - quick links for a new tab page
//!
//! This library keeps an ordered grid of quick links and a set of uploaded
//! icon images, persisted to a small key-value store, with JSON import and
//! export and icon resolution.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//!
//! # Architecture
//! - `storage`: Key-value persistence backends and data model
//! - `services`: Link store, grid reordering, validation, icons, search
//! - `interfaces`: User interfaces (CLI)
//! - `config`: Configuration management
//! - `runtime`: Startup and execution modes
//! - `system`: Logging

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;

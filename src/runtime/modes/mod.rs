//! Mode routing
//!
//! quicktab only ships a CLI mode; the library can be embedded directly.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::run_cli;

//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes defining commands, parsing arguments, and rendering fetched
//! feature collections for the terminal.

mod commands;

pub use commands::*;

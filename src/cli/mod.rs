//! Command-line front end for the `cgraph` binary.

pub mod commands;

//! # elastiq-cli
//!
//! Command-line front end for Elastiq.
//!
//! This crate provides the `elastiq` binary:
//! - `build`: print a query document from flags and/or an intent file
//! - `validate`: check that an intent file applies cleanly

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;

pub use cli::{BuildArgs, Cli, Command};
pub use commands::run;

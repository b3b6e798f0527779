//! Mazebot CLI library.
//!
//! This crate provides the output formatting used by the `mazebot-cli`
//! binary, kept in a library so it can be unit tested.

pub mod output;

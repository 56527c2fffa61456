//! Combines the files of a multi-file Arduino sketch into a single flat
//! source file that can be pasted into a browser-based simulator/editor
//! with no multi-file project support.
//!
//! The transformation is a single linear pass: read each manifest entry in
//! order, wrap it with a banner naming its origin, concatenate, comment out
//! the preprocessor directives that break in a one-file world, and write
//! the result out once.

pub mod combine;
pub mod config;
pub mod directives;
pub mod orchestrator;

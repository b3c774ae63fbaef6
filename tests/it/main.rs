//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead.
//!
//! Structure:
//! - helpers: Builders and recorders shared by the suites
//! - integration: Full touch sequences and control-surface workflows
//! - unit: Single-component unit tests

mod helpers;
mod integration;
mod unit;

//! Shared test utilities for damage calculation tests.
//!
//! Imported by each integration test binary with `mod common;`.

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

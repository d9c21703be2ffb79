//! Common test utilities for launcher scenario tests.
//!
//! This module provides:
//! - `LauncherEnv`: an isolated base directory plus a fake toolchain on `PATH`
//! - `TestResult`: captured output of one launcher run

#![allow(dead_code)]

pub mod env;
pub mod fakes;

pub use env::*;

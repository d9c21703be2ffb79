//! Application Layer
//!
//! Use cases that orchestrate domain services through ports.
//!
//! ## Structure
//!
//! - `launch/` - The full bootstrap sequence, from interpreter probe to UI exit
//! - `patch` - Applies a patch set to a checked-out tree

pub mod launch;
pub mod patch;

pub use launch::{LaunchPlan, LaunchUseCase};
pub use patch::{apply_patch_set, PatchSummary};

//! Launch Use Case
//!
//! Resolve interpreter → fetch → patch → environment → install → launch.

mod options;
mod use_case;

pub use options::LaunchPlan;
pub use use_case::LaunchUseCase;

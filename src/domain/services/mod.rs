//! Domain Services
//!
//! Stateless launcher logic.

mod byteplus;
mod patcher;
mod step_gate;

pub use byteplus::byteplus_patch_set;
pub use patcher::{apply_file_patch, FilePatch, PatchEdit, PatchOutcome, PatchSet};
pub use step_gate::{decide, GateDecision};

//! Step Gate
//!
//! Decides whether a directory-producing step (clone, environment) runs.

use crate::domain::entities::StepProgress;
use crate::domain::value_objects::MarkerPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Step already done
    Skip,
    /// Directory predates any record; keep it and record it as done
    Adopt,
    /// Nothing there yet
    Run,
    /// A launcher started the step and never finished it; remove the directory, then run
    ClearAndRun,
}

/// Gate a step given what is on disk and in the setup state
///
/// | policy   | dir | progress | decision    |
/// |----------|-----|----------|-------------|
/// | presence | yes | any      | Skip        |
/// | sentinel | yes | Complete | Skip        |
/// | sentinel | yes | Unknown  | Adopt       |
/// | sentinel | yes | Started  | ClearAndRun |
/// | any      | no  | any      | Run         |
///
/// Only a directory this launcher started to produce is ever removed.
pub fn decide(policy: MarkerPolicy, dir_exists: bool, progress: StepProgress) -> GateDecision {
    match (policy, dir_exists, progress) {
        (_, false, _) => GateDecision::Run,
        (MarkerPolicy::Presence, true, _) => GateDecision::Skip,
        (MarkerPolicy::Sentinel, true, StepProgress::Complete) => GateDecision::Skip,
        (MarkerPolicy::Sentinel, true, StepProgress::Unknown) => GateDecision::Adopt,
        (MarkerPolicy::Sentinel, true, StepProgress::Started) => GateDecision::ClearAndRun,
    }
}

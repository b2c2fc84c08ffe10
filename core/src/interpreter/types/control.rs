//! Execution status, step results and dispatch effects

use serde::{Deserialize, Serialize};

/* ===================== Status ===================== */

/// Lifecycle state of the VM
///
/// `Halted` and `Failed` are terminal for the current run. The next
/// `execute()` goes back through `Idle` via an implicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Idle,
    Running,
    Halted,
    Failed,
}

/* ===================== Step Result ===================== */

/// Result of executing one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Continue to next step
    Continue,
    /// Execution complete
    Done,
}

/* ===================== Effects ===================== */

/// What a single dispatched instruction did to the VM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The stack changed and nothing else is worth reporting
    Updated,
    /// POP removed this value
    Popped(i64),
    /// PRINT appended this value to the output log
    Printed(i64),
    /// HALT cleared the running flag
    Halted,
}

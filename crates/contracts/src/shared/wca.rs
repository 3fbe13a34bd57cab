use serde::{Deserialize, Serialize};

/// World Class Agents qualification tier.
///
/// `Locked` means the agent failed at least one entry gate and is not
/// eligible for tiered bonus status regardless of score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WcaTier {
    Locked,
    Newcomer,
    Specialist,
    Champion,
}

/// Pass/fail state of the five entry gates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GateCheck {
    /// Tenure gate (months).
    pub duration: bool,
    /// Call volume gate.
    pub volume: bool,
    /// Feedback quote gate.
    pub fbq: bool,
    /// Detractor-rate gate (lower is better).
    pub deep: bool,
    /// Hang-up quality gate.
    pub aq: bool,
}

impl GateCheck {
    pub fn all_passed(&self) -> bool {
        self.duration && self.volume && self.fbq && self.deep && self.aq
    }
}

/// Classification result for one agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateReport {
    pub agent_id: String,
    pub name: String,
    pub gates: GateCheck,
    pub passed: bool,
    pub tier: WcaTier,
    pub pix: f64,
}

//! WCA gate check and tier classification.
//!
//! Five entry gates must all hold before an agent can qualify for a
//! tier at all; the composite PIX score then decides the tier.

use contracts::domain::a001_agent_kpi::KpiAgent;
use contracts::shared::wca::{GateCheck, GateReport, WcaTier};

/// Minimum tenure, months.
pub const GATE_MIN_MONTHS: f64 = 6.0;
/// Minimum call volume in the period.
pub const GATE_MIN_CALLS: f64 = 100.0;
/// Minimum feedback quote, percent.
pub const GATE_MIN_FBQ: f64 = 25.0;
/// Maximum detractor rate, percent. The 2024 rule book used 6.83.
pub const GATE_MAX_DEEP: f64 = 4.73;
/// Minimum hang-up quality (AQ), percent.
pub const GATE_MIN_AQ: f64 = 85.0;

/// PIX thresholds for the unlocked tiers.
pub const TIER_CHAMPION_PIX: f64 = 8.1;
pub const TIER_SPECIALIST_PIX: f64 = 6.1;

/// Evaluate the entry gates and classify the agent.
pub fn classify(agent: &KpiAgent) -> GateReport {
    let gates = GateCheck {
        duration: agent.months >= GATE_MIN_MONTHS,
        volume: agent.calls >= GATE_MIN_CALLS,
        fbq: agent.fbq >= GATE_MIN_FBQ,
        deep: agent.deep <= GATE_MAX_DEEP,
        aq: agent.aufleger >= GATE_MIN_AQ,
    };
    let passed = gates.all_passed();

    let tier = if !passed {
        WcaTier::Locked
    } else if agent.pix >= TIER_CHAMPION_PIX {
        WcaTier::Champion
    } else if agent.pix >= TIER_SPECIALIST_PIX {
        WcaTier::Specialist
    } else {
        WcaTier::Newcomer
    };

    GateReport {
        agent_id: agent.id.clone(),
        name: agent.name.clone(),
        gates,
        passed,
        tier,
        pix: agent.pix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qualified() -> KpiAgent {
        KpiAgent {
            months: 12.0,
            calls: 400.0,
            fbq: 40.0,
            deep: 2.0,
            aufleger: 92.0,
            pix: 7.0,
            ..KpiAgent::empty("101", "Agent 101")
        }
    }

    #[test]
    fn all_gates_pass_never_locked() {
        let report = classify(&qualified());
        assert!(report.passed);
        assert_ne!(report.tier, WcaTier::Locked);
        assert_eq!(report.tier, WcaTier::Specialist);
    }

    #[test]
    fn tier_thresholds() {
        let mut a = qualified();
        a.pix = 8.1;
        assert_eq!(classify(&a).tier, WcaTier::Champion);
        a.pix = 6.1;
        assert_eq!(classify(&a).tier, WcaTier::Specialist);
        a.pix = 6.0;
        assert_eq!(classify(&a).tier, WcaTier::Newcomer);
    }

    #[test]
    fn any_failed_gate_locks_regardless_of_score() {
        // High score, too few calls.
        let mut a = qualified();
        a.pix = 9.0;
        a.calls = 50.0;
        let report = classify(&a);
        assert!(!report.passed);
        assert!(!report.gates.volume);
        assert_eq!(report.tier, WcaTier::Locked);

        // Detractor gate is inverse: lower is better.
        let mut b = qualified();
        b.deep = GATE_MAX_DEEP + 0.01;
        assert_eq!(classify(&b).tier, WcaTier::Locked);
    }
}

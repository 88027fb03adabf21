//! User rule evaluation
//!
//! Turns classification records into a verdict for one user. A rule states
//! whether the user accepts a practice and how much they care about it
//! (`priority`, nominally 1-10). A record violates a rule when the user does
//! not accept the practice and the policy ALLOWS it or makes it CONDITIONAL.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{ClassificationRecord, Practice, Status};

/// Risk score cap
pub const MAX_RISK_SCORE: u32 = 100;

/// Highest rule priority; larger values are treated as this
pub const MAX_PRIORITY: u32 = 10;

/// A user's stance on one practice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRule {
    pub practice: Practice,
    /// Whether the user accepts this practice
    pub allowed: bool,
    /// Importance of the rule; scales severity by `priority / 10`, with
    /// values above [`MAX_PRIORITY`] clamped to it
    #[serde(default = "default_priority")]
    pub priority: u32,
}

fn default_priority() -> u32 {
    10
}

/// Overall outcome of a policy for one user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Safe,
    Warning,
    Blocked,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Safe => write!(f, "SAFE"),
            Self::Warning => write!(f, "WARNING"),
            Self::Blocked => write!(f, "BLOCKED"),
        }
    }
}

/// A record that conflicts with a user rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleViolation {
    pub practice: Practice,
    pub status: Status,
    pub evidence: String,
    pub user_rule: bool,
    pub severity: u32,
}

/// Result of evaluating records against user rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyEvaluation {
    pub verdict: Verdict,
    pub risk_score: u32,
    pub violations: Vec<RuleViolation>,
}

impl Practice {
    /// Severity multiplier for violations of this practice
    pub fn risk_weight(&self) -> f64 {
        match self {
            Self::DataSelling => 2.0,
            Self::ThirdPartySharing => 1.8,
            Self::SensitiveData => 2.0,
            Self::Retention => 1.2,
            Self::Advertising => 1.0,
        }
    }
}

/// Evaluate records against rules.
///
/// Rules are keyed by practice; a later rule for the same practice replaces
/// an earlier one. Records without a rule are ignored.
pub fn evaluate_policy(records: &[ClassificationRecord], rules: &[UserRule]) -> PolicyEvaluation {
    let rule_map: HashMap<Practice, &UserRule> =
        rules.iter().map(|rule| (rule.practice, rule)).collect();

    let violations: Vec<RuleViolation> = records
        .iter()
        .filter_map(|record| {
            let rule = rule_map.get(&record.practice)?;
            if !is_violation(record.status, rule) {
                return None;
            }
            Some(RuleViolation {
                practice: record.practice,
                status: record.status,
                evidence: record.evidence.clone(),
                user_rule: true,
                severity: severity(record.practice, record.status, rule),
            })
        })
        .collect();

    let risk_score = violations
        .iter()
        .map(|v| v.severity)
        .fold(0u32, u32::saturating_add)
        .min(MAX_RISK_SCORE);
    let verdict = determine_verdict(risk_score, violations.len());

    tracing::debug!(
        %verdict,
        risk_score,
        violations = violations.len(),
        "Policy evaluated"
    );

    PolicyEvaluation {
        verdict,
        risk_score,
        violations,
    }
}

fn is_violation(status: Status, rule: &UserRule) -> bool {
    match status {
        Status::Allows | Status::Conditional => !rule.allowed,
        Status::Forbids | Status::Unclear => false,
    }
}

fn severity(practice: Practice, status: Status, rule: &UserRule) -> u32 {
    let base = match status {
        Status::Allows => 30.0,
        Status::Conditional => 20.0,
        Status::Forbids | Status::Unclear => 0.0,
    };
    let priority = f64::from(rule.priority.min(MAX_PRIORITY)) / 10.0;
    (base * priority * practice.risk_weight()).round() as u32
}

fn determine_verdict(risk_score: u32, violation_count: usize) -> Verdict {
    if risk_score >= 70 || violation_count >= 3 {
        Verdict::Blocked
    } else if risk_score >= 40 || violation_count >= 1 {
        Verdict::Warning
    } else {
        Verdict::Safe
    }
}

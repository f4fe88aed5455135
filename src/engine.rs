use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::math::checker;
use crate::types::{AccessibilityLevel, ColorPair, Verdict};

/// A color pair tagged with a caller-supplied label (widget name, theme
/// slot, source location) so audit results can be traced back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditPair {
    pub name: String,
    pub pair: ColorPair,
}

impl AuditPair {
    pub fn new(name: impl Into<String>, pair: ColorPair) -> AuditPair {
        AuditPair {
            name: name.into(),
            pair,
        }
    }
}

/// One audited pair: its label, ratio (if computable), and verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub name: String,
    pub ratio: Option<f64>,
    pub verdict: Verdict,
}

/// Audit results categorized by outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub violations: Vec<AuditEntry>,
    pub passed: Vec<AuditEntry>,
    pub indeterminate: Vec<AuditEntry>,
}

impl AuditSummary {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.indeterminate.is_empty()
    }
}

/// Audit a batch of labeled pairs against one conformance level.
///
/// Pairs are evaluated in parallel with `par_iter()` — each evaluation is
/// an independent pure computation with no shared mutable state.
/// Categorization preserves the input order within each bucket.
pub fn audit(pairs: &[AuditPair], level: AccessibilityLevel) -> AuditSummary {
    let entries: Vec<AuditEntry> = pairs
        .par_iter()
        .map(|audit_pair| {
            let report = checker::report(&audit_pair.pair);
            AuditEntry {
                name: audit_pair.name.clone(),
                ratio: report.ratio,
                verdict: report.verdict(level),
            }
        })
        .collect();

    let mut summary = AuditSummary {
        violations: Vec::new(),
        passed: Vec::new(),
        indeterminate: Vec::new(),
    };
    for entry in entries {
        match entry.verdict {
            Verdict::Pass => summary.passed.push(entry),
            Verdict::Fail => summary.violations.push(entry),
            Verdict::Indeterminate => summary.indeterminate.push(entry),
        }
    }
    summary
}

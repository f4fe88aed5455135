//! WCAG 2.x color-contrast evaluation.
//!
//! Pure computation only: color → relative luminance → contrast ratio →
//! pass/fail against the AA/AAA threshold table. Every operation is a
//! stateless, deterministic function; indeterminate inputs (a [`Color::Clear`]
//! foreground or background) propagate as [`Verdict::Indeterminate`] rather
//! than being coerced to a default.

pub mod engine;
pub mod math;
pub mod types;
pub mod widgets;

pub use engine::{audit, AuditEntry, AuditPair, AuditSummary};
pub use math::checker::{evaluate, report, ContrastReport};
pub use math::wcag::{contrast_ratio, passes_threshold, relative_luminance};
pub use types::{AccessibilityLevel, Color, ColorPair, Verdict};

use serde::{Deserialize, Serialize};

use crate::types::{AccessibilityLevel, ColorPair, Verdict};

/// Classify one pair against one conformance level.
///
/// A `Clear` color anywhere in the pair makes the pair non-assessable
/// and short-circuits to `Indeterminate` before any luminance math runs.
pub fn evaluate(pair: &ColorPair, level: AccessibilityLevel) -> Verdict {
    if pair.has_clear() {
        return Verdict::Indeterminate;
    }
    match super::wcag::pair_contrast_ratio(pair) {
        Some(ratio) => super::wcag::passes_threshold(ratio, level).into(),
        None => Verdict::Indeterminate,
    }
}

/// Ratio plus verdicts at every conformance level, from a single ratio
/// computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastReport {
    /// `None` when the pair could not be assessed.
    pub ratio: Option<f64>,
    pub aa_normal: Verdict,
    pub aa_large: Verdict,
    pub aaa_normal: Verdict,
    pub aaa_large: Verdict,
}

impl ContrastReport {
    pub fn verdict(&self, level: AccessibilityLevel) -> Verdict {
        match level {
            AccessibilityLevel::AaNormal => self.aa_normal,
            AccessibilityLevel::AaLarge => self.aa_large,
            AccessibilityLevel::AaaNormal => self.aaa_normal,
            AccessibilityLevel::AaaLarge => self.aaa_large,
        }
    }
}

/// Evaluate a pair at all four levels.
pub fn report(pair: &ColorPair) -> ContrastReport {
    let ratio = if pair.has_clear() {
        None
    } else {
        super::wcag::pair_contrast_ratio(pair)
    };
    let verdict_at = |level: AccessibilityLevel| match ratio {
        Some(r) => super::wcag::passes_threshold(r, level).into(),
        None => Verdict::Indeterminate,
    };
    ContrastReport {
        ratio,
        aa_normal: verdict_at(AccessibilityLevel::AaNormal),
        aa_large: verdict_at(AccessibilityLevel::AaLarge),
        aaa_normal: verdict_at(AccessibilityLevel::AaaNormal),
        aaa_large: verdict_at(AccessibilityLevel::AaaLarge),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn pair(fg: Color, bg: Color) -> ColorPair {
        ColorPair::new(fg, bg)
    }

    #[test]
    fn black_on_white_passes_everything() {
        let p = pair(Color::BLACK, Color::WHITE);
        for level in AccessibilityLevel::ALL {
            assert_eq!(evaluate(&p, level), Verdict::Pass, "{level:?}");
        }
    }

    #[test]
    fn white_on_white_fails_everything() {
        let p = pair(Color::WHITE, Color::WHITE);
        for level in AccessibilityLevel::ALL {
            assert_eq!(evaluate(&p, level), Verdict::Fail, "{level:?}");
        }
    }

    #[test]
    fn blue_on_green_matches_reference_scenario() {
        // ratio ~ 6.26: passes AA normal and AAA large, fails AAA normal
        let p = pair(Color::rgb(0.0, 0.0, 1.0), Color::rgb(0.0, 1.0, 0.0));
        assert_eq!(evaluate(&p, AccessibilityLevel::AaNormal), Verdict::Pass);
        assert_eq!(evaluate(&p, AccessibilityLevel::AaLarge), Verdict::Pass);
        assert_eq!(evaluate(&p, AccessibilityLevel::AaaLarge), Verdict::Pass);
        assert_eq!(evaluate(&p, AccessibilityLevel::AaaNormal), Verdict::Fail);
    }

    #[test]
    fn clear_member_is_indeterminate_at_every_level() {
        let clear_fg = pair(Color::Clear, Color::WHITE);
        let clear_bg = pair(Color::BLACK, Color::Clear);
        for level in AccessibilityLevel::ALL {
            assert_eq!(evaluate(&clear_fg, level), Verdict::Indeterminate);
            assert_eq!(evaluate(&clear_bg, level), Verdict::Indeterminate);
        }
    }

    #[test]
    fn report_matches_per_level_evaluation() {
        let p = pair(Color::rgb(0.0, 0.0, 1.0), Color::rgb(0.0, 1.0, 0.0));
        let report = report(&p);
        assert!(report.ratio.is_some());
        for level in AccessibilityLevel::ALL {
            assert_eq!(report.verdict(level), evaluate(&p, level), "{level:?}");
        }
    }

    #[test]
    fn report_for_clear_pair() {
        let report = report(&pair(Color::Clear, Color::BLACK));
        assert!(report.ratio.is_none());
        for level in AccessibilityLevel::ALL {
            assert_eq!(report.verdict(level), Verdict::Indeterminate);
        }
    }

    #[test]
    fn report_serializes() {
        let report = report(&pair(Color::BLACK, Color::WHITE));
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"aa_normal\":\"pass\""));
    }
}

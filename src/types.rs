use serde::{Deserialize, Serialize};

/// An opaque sRGB color, or the distinguished `Clear` state for a color
/// that has no resolvable channel values (unset or fully transparent).
///
/// Channels are normalized to `[0, 1]`. `Clear` propagates as
/// indeterminate through every computation; it is never coerced to a
/// default color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Rgb { r: f64, g: f64, b: f64 },
    Clear,
}

impl Color {
    pub const BLACK: Color = Color::Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub const WHITE: Color = Color::Rgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color::Rgb { r, g, b }
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, Color::Clear)
    }

    /// Channel triple, or `None` for `Clear`.
    pub(crate) fn channels(&self) -> Option<(f64, f64, f64)> {
        match *self {
            Color::Rgb { r, g, b } => Some((r, g, b)),
            Color::Clear => None,
        }
    }
}

/// A foreground/background color pair, the input unit for contrast
/// evaluation. The contrast ratio itself is symmetric in the two roles;
/// the roles matter only to callers (text vs. backdrop).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorPair {
    pub foreground: Color,
    pub background: Color,
}

impl ColorPair {
    pub fn new(foreground: Color, background: Color) -> ColorPair {
        ColorPair {
            foreground,
            background,
        }
    }

    /// True if either member is `Clear`, making the pair non-assessable.
    pub fn has_clear(&self) -> bool {
        self.foreground.is_clear() || self.background.is_clear()
    }
}

/// WCAG 2.x conformance target. Large text is bold >= 14pt or regular
/// >= 18pt. There is no implicit default; callers state the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessibilityLevel {
    AaNormal,
    AaLarge,
    AaaNormal,
    AaaLarge,
}

impl AccessibilityLevel {
    pub const ALL: [AccessibilityLevel; 4] = [
        AccessibilityLevel::AaNormal,
        AccessibilityLevel::AaLarge,
        AccessibilityLevel::AaaNormal,
        AccessibilityLevel::AaaLarge,
    ];

    /// Minimum contrast ratio for the level. The comparison against it is
    /// strict: a ratio exactly at the minimum does not conform.
    pub fn min_ratio(self) -> f64 {
        match self {
            AccessibilityLevel::AaNormal => 4.5,
            AccessibilityLevel::AaLarge => 3.0,
            AccessibilityLevel::AaaNormal => 7.0,
            AccessibilityLevel::AaaLarge => 4.5,
        }
    }
}

/// Three-valued classification outcome. `Indeterminate` means the pair
/// could not be assessed (a `Clear` color was involved); it is distinct
/// from both passing and failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Fail,
    Indeterminate,
}

impl Verdict {
    pub fn is_pass(self) -> bool {
        self == Verdict::Pass
    }

    /// Collapse to an optional boolean: `None` when indeterminate.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Verdict::Pass => Some(true),
            Verdict::Fail => Some(false),
            Verdict::Indeterminate => None,
        }
    }
}

impl From<bool> for Verdict {
    fn from(pass: bool) -> Verdict {
        if pass {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

use crate::types::{AccessibilityLevel, Color, ColorPair};

/// Convert a normalized sRGB channel (0.0-1.0) to linear light.
/// sRGB -> linear: if c <= 0.03928: c/12.92, else ((c+0.055)/1.055)^2.4
///
/// The 0.03928 breakpoint and 2.4 exponent are the WCAG 2.x definition
/// and must not be altered.
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.x, in [0, 1].
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
///
/// `Clear` has no channels to weigh, so it yields `None`.
pub fn relative_luminance(color: Color) -> Option<f64> {
    let (r, g, b) = color.channels()?;
    Some(0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b))
}

/// WCAG 2.x contrast ratio between two colors, in [1, 21].
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
///
/// `None` if either luminance is indeterminate; symmetric in argument
/// order.
pub fn contrast_ratio(foreground: Color, background: Color) -> Option<f64> {
    let lf = relative_luminance(foreground)?;
    let lb = relative_luminance(background)?;
    let (lighter, darker) = if lf > lb { (lf, lb) } else { (lb, lf) };
    Some((lighter + 0.05) / (darker + 0.05))
}

/// Contrast ratio of a pair; see [`contrast_ratio`].
pub fn pair_contrast_ratio(pair: &ColorPair) -> Option<f64> {
    contrast_ratio(pair.foreground, pair.background)
}

/// Strict threshold comparison: a ratio exactly at the minimum fails.
pub fn passes_threshold(ratio: f64, level: AccessibilityLevel) -> bool {
    ratio > level.min_ratio()
}

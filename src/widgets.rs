//! Adapter seam for UI-widget-like callers.
//!
//! The core never touches widget types directly; callers implement these
//! traits (or build [`ColorPair`]s themselves) and concrete UI-framework
//! bindings live outside this crate. A collaborator with an unset color
//! reports `Indeterminate` rather than substituting a placeholder.

use serde::{Deserialize, Serialize};

use crate::math::checker;
use crate::types::{AccessibilityLevel, Color, ColorPair, Verdict};

/// A widget that draws text over a single background, e.g. a label.
pub trait TextDisplay {
    fn text_color(&self) -> Color;

    /// `None` when no background has been set.
    fn background_color(&self) -> Option<Color>;
}

/// Interaction states of a stateful control, e.g. a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlState {
    Normal,
    Highlighted,
    Selected,
    Disabled,
}

impl ControlState {
    pub const ALL: [ControlState; 4] = [
        ControlState::Normal,
        ControlState::Highlighted,
        ControlState::Selected,
        ControlState::Disabled,
    ];
}

/// A control with one background and a per-state foreground color.
/// Each state is evaluated as an independent pair.
pub trait StatefulControl {
    /// `None` when no background has been set.
    fn background_color(&self) -> Option<Color>;

    /// Title color for the given state; `None` when unset for that state.
    fn title_color(&self, state: ControlState) -> Option<Color>;
}

/// Classify a text display's current colors.
pub fn label_verdict(display: &impl TextDisplay, level: AccessibilityLevel) -> Verdict {
    match display.background_color() {
        Some(background) => {
            let pair = ColorPair::new(display.text_color(), background);
            checker::evaluate(&pair, level)
        }
        None => Verdict::Indeterminate,
    }
}

/// Classify one interaction state of a stateful control.
pub fn control_verdict(
    control: &impl StatefulControl,
    state: ControlState,
    level: AccessibilityLevel,
) -> Verdict {
    match (control.title_color(state), control.background_color()) {
        (Some(title), Some(background)) => {
            let pair = ColorPair::new(title, background);
            checker::evaluate(&pair, level)
        }
        _ => Verdict::Indeterminate,
    }
}

/// Classify every interaction state of a control, each independently.
pub fn control_report(
    control: &impl StatefulControl,
    level: AccessibilityLevel,
) -> Vec<(ControlState, Verdict)> {
    ControlState::ALL
        .iter()
        .map(|&state| (state, control_verdict(control, state, level)))
        .collect()
}

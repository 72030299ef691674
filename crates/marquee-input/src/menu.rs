#![forbid(unsafe_code)]

//! Context-menu descriptor.
//!
//! The engine owns two booleans the user can toggle from a context menu:
//! the persisted snap-to-ratio setting and the presentational guide-line
//! flag. Presentation is the host's job; this module only describes the
//! menu as data and maps a chosen action back onto the configuration.

use marquee_core::EngineConfig;

/// Action attached to a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Toggle the persisted "snap to aspect ratio" setting.
    ToggleSnapToRatio,
    /// Toggle guide-line rendering (pass-through presentation state).
    ToggleGuideLines,
}

/// One entry of the context menu, for an external menu renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuItem {
    /// Stable identifier.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Checkmark state.
    pub checked: bool,
    /// What choosing this item does.
    pub action: MenuAction,
}

/// Describe the context menu for the current configuration.
#[must_use]
pub fn context_menu(config: &EngineConfig) -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: "snap-to-ratio",
            label: "Snap to aspect ratio",
            checked: config.snap_to_ratio,
            action: MenuAction::ToggleSnapToRatio,
        },
        MenuItem {
            id: "guide-lines",
            label: "Show guide lines",
            checked: config.show_guide_lines,
            action: MenuAction::ToggleGuideLines,
        },
    ]
}

/// Apply a chosen menu action to the configuration.
pub fn apply_action(config: &mut EngineConfig, action: MenuAction) {
    match action {
        MenuAction::ToggleSnapToRatio => config.snap_to_ratio = !config.snap_to_ratio,
        MenuAction::ToggleGuideLines => config.show_guide_lines = !config.show_guide_lines,
    }
}

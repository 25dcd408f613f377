//! Sidebar collapse/expand state and the layout derived from it.
//!
//! The sidebar has exactly two modes. All geometry and visibility decisions
//! that depend on the mode are computed in one place ([`SidebarLayout`])
//! so the render code never mutates widget trees imperatively; it just reads
//! the layout for the current frame.

use crate::config::{SidebarStyle, StatusPanelStyle};

// ─────────────────────────────────────────────────────────────────────────────
// SidebarState
// ─────────────────────────────────────────────────────────────────────────────

/// The two sidebar modes. The only transition is the user-driven toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SidebarState {
    Expanded,
    Collapsed,
}

impl Default for SidebarState {
    fn default() -> Self {
        SidebarState::Expanded
    }
}

impl SidebarState {
    /// Flip between `Expanded` and `Collapsed`.
    pub fn toggle(&mut self) {
        *self = match self {
            SidebarState::Expanded => SidebarState::Collapsed,
            SidebarState::Collapsed => SidebarState::Expanded,
        };
    }

    /// Enter `Collapsed`. No-op if already collapsed.
    pub fn set_collapsed(&mut self) {
        *self = SidebarState::Collapsed;
    }

    /// Enter `Expanded`. No-op if already expanded.
    pub fn set_expanded(&mut self) {
        *self = SidebarState::Expanded;
    }

    pub fn is_collapsed(&self) -> bool {
        matches!(self, SidebarState::Collapsed)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SidebarLayout
// ─────────────────────────────────────────────────────────────────────────────

/// Concrete per-frame geometry and visibility for the sidebar.
///
/// Pure function of ([`SidebarState`], style config); recomputed every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SidebarLayout {
    /// Target sidebar width in points (the rendered width may still be
    /// animating towards this).
    pub width: f32,
    /// Show menu-entry text labels, the app name, and the username.
    pub show_labels: bool,
    /// Show the email line inside the status panel.
    pub show_email: bool,
    /// Show the status panel's menu-dots button.
    pub show_panel_dots: bool,
    /// Plan badge size in points.
    pub badge_size: [f32; 2],
    /// Status panel height in points.
    pub panel_height: f32,
}

impl SidebarLayout {
    /// Compute the layout for `state` under the given styles.
    pub fn compute(
        state: SidebarState,
        sidebar: &SidebarStyle,
        panel: &StatusPanelStyle,
    ) -> Self {
        match state {
            SidebarState::Expanded => Self {
                width: sidebar.expanded_width,
                show_labels: true,
                show_email: true,
                show_panel_dots: true,
                badge_size: panel.badge.expanded_size,
                panel_height: panel.expanded_height,
            },
            SidebarState::Collapsed => Self {
                width: sidebar.collapsed_width,
                show_labels: false,
                show_email: false,
                show_panel_dots: false,
                badge_size: panel.badge.collapsed_size,
                panel_height: panel.collapsed_height,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SidebarStyle, StatusPanelStyle};

    #[test]
    fn toggle_parity_from_expanded() {
        for count in 0..7 {
            let mut state = SidebarState::default();
            for _ in 0..count {
                state.toggle();
            }
            if count % 2 == 0 {
                assert_eq!(
                    state,
                    SidebarState::Expanded,
                    "even toggle count {} must end expanded",
                    count
                );
            } else {
                assert_eq!(
                    state,
                    SidebarState::Collapsed,
                    "odd toggle count {} must end collapsed",
                    count
                );
            }
        }
    }

    #[test]
    fn set_operations_are_idempotent() {
        let mut state = SidebarState::Expanded;
        state.set_expanded();
        assert_eq!(state, SidebarState::Expanded);
        state.set_collapsed();
        state.set_collapsed();
        assert_eq!(state, SidebarState::Collapsed);
        state.set_expanded();
        assert_eq!(state, SidebarState::Expanded);
    }

    #[test]
    fn layout_follows_state() {
        let sidebar = SidebarStyle::default();
        let panel = StatusPanelStyle::default();

        let expanded = SidebarLayout::compute(SidebarState::Expanded, &sidebar, &panel);
        assert_eq!(expanded.width, sidebar.expanded_width);
        assert!(expanded.show_labels && expanded.show_email && expanded.show_panel_dots);
        assert_eq!(expanded.badge_size, panel.badge.expanded_size);
        assert_eq!(expanded.panel_height, panel.expanded_height);

        let collapsed = SidebarLayout::compute(SidebarState::Collapsed, &sidebar, &panel);
        assert_eq!(collapsed.width, sidebar.collapsed_width);
        assert!(!collapsed.show_labels && !collapsed.show_email && !collapsed.show_panel_dots);
        assert_eq!(collapsed.badge_size, panel.badge.collapsed_size);
        assert_eq!(collapsed.panel_height, panel.collapsed_height);
    }

    #[test]
    fn layout_is_pure() {
        let sidebar = SidebarStyle::default();
        let panel = StatusPanelStyle::default();
        let a = SidebarLayout::compute(SidebarState::Collapsed, &sidebar, &panel);
        let b = SidebarLayout::compute(SidebarState::Collapsed, &sidebar, &panel);
        assert_eq!(a, b, "same inputs must produce the same layout");
    }
}

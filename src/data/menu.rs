//! Typed menu-entry records and the activation model.
//!
//! Each navigable destination is a [`MenuEntry`] identified by its label
//! string. [`MenuModel`] owns the ordered entry list and enforces the
//! activation invariant: after any successful activation exactly one entry
//! is active; before the first activation none is.

use crate::assets::active_icon_file;

// ─────────────────────────────────────────────────────────────────────────────
// MenuEntry
// ─────────────────────────────────────────────────────────────────────────────

/// One navigable tab/destination with an icon and label.
///
/// The label doubles as the unique identifier. The icon file is the
/// asset-relative path of the normal-state SVG; the active-state variant is
/// derived from it by filename substitution, never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuEntry {
    /// Unique label, also the identifier used for activation.
    pub label: String,
    /// Asset-relative path of the normal-state icon.
    pub icon_file: String,
    /// Per-entry icon size override in points. `None` uses the sidebar style
    /// default.
    pub icon_size: Option<f32>,
    /// Whether this entry is the active tab.
    pub active: bool,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, icon_file: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon_file: icon_file.into(),
            icon_size: None,
            active: false,
        }
    }

    /// Builder-style icon size override.
    pub fn with_icon_size(mut self, size: f32) -> Self {
        self.icon_size = Some(size);
        self
    }

    /// The active-state variant of this entry's icon file.
    pub fn active_icon_file(&self) -> String {
        active_icon_file(&self.icon_file)
    }

    /// The icon file to display right now (active variant when active).
    pub fn current_icon_file(&self) -> String {
        if self.active {
            self.active_icon_file()
        } else {
            self.icon_file.clone()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MenuModel
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered collection of menu entries plus the activation operation.
#[derive(Clone, Debug, Default)]
pub struct MenuModel {
    entries: Vec<MenuEntry>,
}

impl MenuModel {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Activate the entry with the given label.
    ///
    /// Returns `true` and deactivates every other entry when the label is
    /// known. An unknown label is a complete no-op: no entry changes and
    /// `false` is returned.
    pub fn activate(&mut self, label: &str) -> bool {
        if !self.entries.iter().any(|e| e.label == label) {
            return false;
        }
        for entry in &mut self.entries {
            entry.active = entry.label == label;
        }
        true
    }

    /// Label of the active entry, if any.
    pub fn active_label(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.active)
            .map(|e| e.label.as_str())
    }

    pub fn is_active(&self, label: &str) -> bool {
        self.entries.iter().any(|e| e.active && e.label == label)
    }

    fn active_count(&self) -> usize {
        self.entries.iter().filter(|e| e.active).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> MenuModel {
        MenuModel::new(vec![
            MenuEntry::new("Dashboard", "icons/home.svg").with_icon_size(30.0),
            MenuEntry::new("VPN", "icons/vpn.svg"),
            MenuEntry::new("Security", "icons/security.svg"),
        ])
    }

    #[test]
    fn no_entry_active_before_first_activation() {
        let m = model();
        assert_eq!(m.active_count(), 0);
        assert_eq!(m.active_label(), None);
    }

    #[test]
    fn activation_leaves_exactly_one_active() {
        let mut m = model();
        assert!(m.activate("VPN"));
        assert_eq!(m.active_count(), 1);
        assert_eq!(m.active_label(), Some("VPN"));

        assert!(m.activate("Security"));
        assert_eq!(m.active_count(), 1, "previous active entry must be cleared");
        assert_eq!(m.active_label(), Some("Security"));
        assert!(!m.is_active("VPN"));
    }

    #[test]
    fn unknown_label_is_a_noop() {
        let mut m = model();
        m.activate("Dashboard");
        let before = m.clone();
        assert!(!m.activate("Telemetry"));
        assert_eq!(
            m.entries(),
            before.entries(),
            "unknown label must not change any entry"
        );
        assert_eq!(m.active_label(), Some("Dashboard"));
    }

    #[test]
    fn displayed_icon_follows_active_flag() {
        let mut m = model();
        assert_eq!(m.entries()[1].current_icon_file(), "icons/vpn.svg");
        m.activate("VPN");
        assert_eq!(m.entries()[1].current_icon_file(), "icons/vpn-2.svg");
        assert_eq!(
            m.entries()[0].current_icon_file(),
            "icons/home.svg",
            "inactive entries keep the normal variant"
        );
    }
}

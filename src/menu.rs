// SPDX-License-Identifier: MPL-2.0
//! Settings menu navigation.
//!
//! The menu is either closed or showing exactly one panel. Navigation is a
//! flat jump to the named panel, and "back" always returns to [`PanelId::Main`].

use std::fmt;

/// Panels of the settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanelId {
    #[default]
    Main,
    Speed,
    CaptionsTrack,
    CaptionsStyle,
    Quality,
}

impl PanelId {
    pub const ALL: [PanelId; 5] = [
        PanelId::Main,
        PanelId::Speed,
        PanelId::CaptionsTrack,
        PanelId::CaptionsStyle,
        PanelId::Quality,
    ];

    /// Resolves a panel name from markup. Unknown names fall back to `Main`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "speed" => PanelId::Speed,
            "captions-track" | "captions" => PanelId::CaptionsTrack,
            "captions-style" => PanelId::CaptionsStyle,
            "quality" => PanelId::Quality,
            "main" => PanelId::Main,
            other => {
                log::debug!("Unknown menu panel {:?}, showing main", other);
                PanelId::Main
            }
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PanelId::Main => "main",
            PanelId::Speed => "speed",
            PanelId::CaptionsTrack => "captions-track",
            PanelId::CaptionsStyle => "captions-style",
            PanelId::Quality => "quality",
        }
    }

    /// Position of the panel in the horizontally sliding panel strip.
    #[must_use]
    pub fn slot(self) -> usize {
        match self {
            PanelId::Main => 0,
            PanelId::Speed => 1,
            PanelId::CaptionsTrack => 2,
            PanelId::CaptionsStyle => 3,
            PanelId::Quality => 4,
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open(PanelId),
}

/// The player's single settings menu.
///
/// There is one navigator per player, so at most one menu can be open.
#[derive(Debug, Clone, Default)]
pub struct MenuNavigator {
    state: MenuState,
}

impl MenuNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, MenuState::Open(_))
    }

    /// Visible panel, `None` while closed.
    #[must_use]
    pub fn current(&self) -> Option<PanelId> {
        match self.state {
            MenuState::Open(panel) => Some(panel),
            MenuState::Closed => None,
        }
    }

    /// While open, the menu keeps the controls chrome visible.
    #[must_use]
    pub fn holds_chrome(&self) -> bool {
        self.is_open()
    }

    /// Opens at the main panel. Returns false if already open.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.state = MenuState::Open(PanelId::Main);
        true
    }

    /// Closes the menu. The next [`open`](Self::open) starts at `Main`.
    /// Returns false if already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = MenuState::Closed;
        true
    }

    /// Opens when closed, closes when open.
    pub fn toggle(&mut self) {
        if !self.close() {
            self.open();
        }
    }

    /// Jumps straight to `panel`. Ignored while closed.
    pub fn navigate(&mut self, panel: PanelId) -> bool {
        if !self.is_open() {
            log::debug!("Ignoring navigation to {} while menu is closed", panel);
            return false;
        }
        self.state = MenuState::Open(panel);
        true
    }

    /// Navigates by panel name, with unknown names landing on `Main`.
    pub fn navigate_named(&mut self, name: &str) -> bool {
        self.navigate(PanelId::from_name(name))
    }

    /// Returns to the main panel.
    pub fn back(&mut self) -> bool {
        self.navigate(PanelId::Main)
    }

    /// Handles a pointer press anywhere in the document.
    ///
    /// A press outside the menu subtree closes it. Returns true if the
    /// menu was closed by this press.
    pub fn on_pointer_down(&mut self, inside_menu: bool) -> bool {
        !inside_menu && self.close()
    }
}

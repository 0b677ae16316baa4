// SPDX-License-Identifier: MPL-2.0
//! Events the player consumes.

use crate::chrome::PointerKind;
use crate::gesture::{DragKind, PointerSample};
use crate::media::{Fraction, MediaEvent, TrackBounds};
use crate::menu::PanelId;
use crate::notifications::NotificationId;
use crate::settings::StyleInput;
use std::time::Instant;

/// Everything that can happen to a player, processed one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    Media(MediaEvent),
    Input(InputEvent),
    /// Periodic tick driving auto-hide and transient overlays.
    Tick(Instant),
}

impl From<MediaEvent> for PlayerEvent {
    fn from(event: MediaEvent) -> Self {
        PlayerEvent::Media(event)
    }
}

impl From<InputEvent> for PlayerEvent {
    fn from(event: InputEvent) -> Self {
        PlayerEvent::Input(event)
    }
}

impl From<Command> for PlayerEvent {
    fn from(command: Command) -> Self {
        PlayerEvent::Input(InputEvent::Command(command))
    }
}

/// Non-character keys the player reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Named(NamedKey),
    Character(String),
}

impl Key {
    #[must_use]
    pub fn character(c: char) -> Self {
        Key::Character(c.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
    };
}

/// A key press on the focused player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
    /// Focus is in a text field (e.g. the caption font input).
    pub in_text_input: bool,
}

impl KeyPress {
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
            in_text_input: false,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn in_text_input(mut self) -> Self {
        self.in_text_input = true;
        self
    }
}

/// High-level operations, from buttons, menu inputs or the keyboard map.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    TogglePlay,
    ToggleMute,
    /// Relative seek in seconds; negative goes back.
    SeekBy(f64),
    SeekTo(Fraction),
    VolumeUp,
    VolumeDown,
    /// Moves through the speed presets; negative is slower.
    StepSpeed(i32),
    /// Speed slider position.
    SetSpeedIndex(usize),
    ToggleCaptions,
    /// Captions menu choice; `None` is "Off".
    SelectCaptions(Option<usize>),
    SelectQuality(usize),
    ToggleMenu,
    OpenMenu,
    CloseMenu,
    NavigateMenu(PanelId),
    MenuBack,
    ToggleBooster,
    ToggleAmbientMode,
    EditStyle(StyleInput),
    Fullscreen,
    PictureInPicture,
    Download,
    DismissNotification(NotificationId),
}

/// Raw input on the player's surface and controls.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed on the progress or volume track.
    DragStart {
        kind: DragKind,
        sample: PointerSample,
        bounds: TrackBounds,
    },
    /// Pointer moved anywhere while a drag may be active.
    DragMove {
        kind: DragKind,
        sample: PointerSample,
        bounds: TrackBounds,
    },
    /// Pointer released anywhere.
    DragEnd {
        kind: DragKind,
        sample: PointerSample,
        bounds: TrackBounds,
    },
    /// Mouse hovering the progress track at `x`.
    ProgressHover {
        x: f64,
        bounds: TrackBounds,
        tooltip_width: f64,
    },
    ProgressLeave,
    /// Click on the bare media surface.
    SurfaceClick { pointer: PointerKind },
    /// Double click on the bare surface, `x` relative to its left edge.
    SurfaceDoubleClick { x: f64, width: f64 },
    /// Pointer moved over the player.
    PointerMove { pointer: PointerKind },
    /// Pointer left the player.
    PointerLeave,
    /// Pointer pressed anywhere in the document.
    DocumentPointerDown { inside_menu: bool },
    Key(KeyPress),
    Command(Command),
}

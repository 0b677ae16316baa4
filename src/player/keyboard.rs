// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts.
//!
//! | Key            | Command                          |
//! |----------------|----------------------------------|
//! | `Space`, `k`   | play / pause                     |
//! | `m`            | mute                             |
//! | `f`            | fullscreen                       |
//! | `p`            | picture-in-picture               |
//! | `c`            | captions on / off                |
//! | `←` / `→`      | seek by the short step           |
//! | `j` / `l`      | seek by the long step            |
//! | `↑` / `↓`      | volume step                      |
//! | `,` / `.`      | previous / next speed preset     |
//! | `0`–`9`        | seek to that tenth of the media  |
//! | `Ctrl+Z`       | volume booster                   |

use super::input::{Command, Key, KeyPress, NamedKey};
use crate::config::Config;
use crate::media::Fraction;

/// Maps a key press to a command. Keys typed into text inputs are left
/// alone; letters are case-insensitive.
#[must_use]
pub fn command_for(press: &KeyPress, config: &Config) -> Option<Command> {
    if press.in_text_input {
        return None;
    }

    let character = match &press.key {
        Key::Named(named) => {
            return match named {
                NamedKey::Space => Some(Command::TogglePlay),
                NamedKey::ArrowLeft => Some(Command::SeekBy(-config.seek_step())),
                NamedKey::ArrowRight => Some(Command::SeekBy(config.seek_step())),
                NamedKey::ArrowUp => Some(Command::VolumeUp),
                NamedKey::ArrowDown => Some(Command::VolumeDown),
                NamedKey::Escape => None,
            };
        }
        Key::Character(c) => c.to_lowercase(),
    };

    let mut chars = character.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };

    if let Some(digit) = c.to_digit(10) {
        return Some(Command::SeekTo(Fraction::new(f64::from(digit) / 10.0)));
    }

    if press.modifiers.ctrl {
        return (c == 'z').then_some(Command::ToggleBooster);
    }

    match c {
        ' ' | 'k' => Some(Command::TogglePlay),
        'm' => Some(Command::ToggleMute),
        'f' => Some(Command::Fullscreen),
        'p' => Some(Command::PictureInPicture),
        'c' => Some(Command::ToggleCaptions),
        'j' => Some(Command::SeekBy(-config.long_seek_step())),
        'l' => Some(Command::SeekBy(config.long_seek_step())),
        ',' => Some(Command::StepSpeed(-1)),
        '.' => Some(Command::StepSpeed(1)),
        _ => None,
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Captions track selection against the live text track list.

use super::selection::TrackSelection;
use crate::media::{TrackIdentity, TrackList, TrackMode};

/// One row of the captions menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionEntry {
    /// Index into the media's track list, `None` for "Off".
    pub index: Option<usize>,
    pub label: String,
}

/// Keeps at most one text track showing.
///
/// Indices refer to positions in the media's track list. Metadata tracks
/// are never offered. The active track and the last explicit choice are
/// remembered by label, kind and order so that a rebuild after tracks are added
/// or removed follows them to their new positions, or forgets them when
/// they are gone.
#[derive(Debug, Clone, Default)]
pub struct CaptionsManager {
    selection: TrackSelection,
    active_anchor: Option<TrackAnchor>,
    last_anchor: Option<TrackAnchor>,
    entries: Vec<CaptionEntry>,
    track_count: usize,
}

impl CaptionsManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.selection.active()
    }

    #[must_use]
    pub fn selection(&self) -> &TrackSelection {
        &self.selection
    }

    /// Whether the captions controls should be shown at all.
    #[must_use]
    pub fn has_tracks(&self) -> bool {
        self.track_count > 0
    }

    /// Menu rows: "Off" followed by every selectable track.
    #[must_use]
    pub fn entries(&self) -> &[CaptionEntry] {
        &self.entries
    }

    /// Status text of the captions menu entry.
    #[must_use]
    pub fn status_label(&self) -> String {
        self.active()
            .and_then(|index| self.entries.iter().find(|e| e.index == Some(index)))
            .map_or_else(|| "Off".to_string(), |entry| entry.label.clone())
    }

    /// Rebuilds the menu after the track list changed.
    ///
    /// Every track is set to hidden first so that two tracks can never be
    /// showing at once; the active track, if it can still be told apart,
    /// is then shown again.
    pub fn rebuild(&mut self, tracks: &mut dyn TrackList) {
        self.track_count = tracks.len();
        self.entries = vec![CaptionEntry {
            index: None,
            label: "Off".to_string(),
        }];

        for index in 0..tracks.len() {
            let Some(track) = tracks.track(index) else {
                continue;
            };
            tracks.set_mode(index, TrackMode::Hidden);
            if track.kind.is_selectable() {
                self.entries.push(CaptionEntry {
                    index: Some(index),
                    label: track_label(&track.label, index),
                });
            }
        }

        let resolved = self.active_anchor.as_ref().and_then(|a| a.resolve(tracks));
        if resolved.is_none() && self.active().is_some() {
            log::info!("Active captions track disappeared, captions off");
            self.active_anchor = None;
        }
        let last = self.last_anchor.as_ref().and_then(|a| a.resolve(tracks));
        if last.is_none() {
            self.last_anchor = None;
        }

        self.selection.follow(resolved, last);
        if let Some(index) = resolved {
            tracks.set_mode(index, TrackMode::Showing);
        }
    }

    /// Shows track `index`, or turns captions off with `None`.
    ///
    /// Returns false when nothing changed: `index` is already active, does
    /// not exist, or is a metadata track.
    pub fn select(&mut self, index: Option<usize>, tracks: &mut dyn TrackList) -> bool {
        if index == self.active() {
            return false;
        }
        let anchor = match index {
            Some(i) => match TrackAnchor::at(tracks, i) {
                Some(anchor) => Some(anchor),
                None => {
                    log::warn!("Ignoring selection of unavailable captions track {}", i);
                    return false;
                }
            },
            None => None,
        };

        if let Some(previous) = self.active() {
            tracks.set_mode(previous, TrackMode::Hidden);
        }
        if let Some(i) = index {
            tracks.set_mode(i, TrackMode::Showing);
        }
        if anchor.is_some() {
            self.last_anchor.clone_from(&anchor);
        }
        self.active_anchor = anchor;
        self.selection.set(index);
        log::debug!("Captions track set to {:?}", index);
        true
    }

    /// Turns captions off, or back on at the last chosen track.
    ///
    /// With no tracks this does nothing. If the last chosen track is gone,
    /// the first selectable track is used.
    pub fn toggle(&mut self, tracks: &mut dyn TrackList) -> bool {
        if tracks.is_empty() {
            return false;
        }
        let target = match self.selection.toggle_target() {
            None => None,
            Some(last) if self.last_anchor.is_some() && is_selectable(tracks, last) => Some(last),
            Some(_) => match (0..tracks.len()).find(|&i| is_selectable(tracks, i)) {
                Some(first) => Some(first),
                None => return false,
            },
        };
        self.select(target, tracks)
    }
}

/// Locates one selectable track across list changes.
///
/// Tracks sharing a label and kind are told apart by their order. When the
/// number of such tracks changes, the one that went away cannot be known,
/// so the anchor no longer resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TrackAnchor {
    identity: TrackIdentity,
    /// Position among the tracks sharing `identity`.
    occurrence: usize,
    /// Number of tracks sharing `identity` when the anchor was taken.
    siblings: usize,
}

impl TrackAnchor {
    fn at(tracks: &dyn TrackList, index: usize) -> Option<Self> {
        let track = tracks.track(index).filter(|t| t.kind.is_selectable())?;
        let identity = track.identity();
        let matches = positions_of(tracks, &identity);
        let occurrence = matches.iter().position(|&i| i == index)?;
        Some(Self {
            identity,
            occurrence,
            siblings: matches.len(),
        })
    }

    fn resolve(&self, tracks: &dyn TrackList) -> Option<usize> {
        let matches = positions_of(tracks, &self.identity);
        if matches.len() != self.siblings {
            return None;
        }
        matches.get(self.occurrence).copied()
    }
}

fn positions_of(tracks: &dyn TrackList, identity: &TrackIdentity) -> Vec<usize> {
    (0..tracks.len())
        .filter(|&i| {
            tracks
                .track(i)
                .is_some_and(|t| t.kind.is_selectable() && t.identity() == *identity)
        })
        .collect()
}

fn is_selectable(tracks: &dyn TrackList, index: usize) -> bool {
    tracks
        .track(index)
        .is_some_and(|track| track.kind.is_selectable())
}

fn track_label(label: &str, index: usize) -> String {
    if label.trim().is_empty() {
        format!("Track {}", index + 1)
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{TextTrack, TrackKind};

    fn tracks() -> Vec<TextTrack> {
        vec![
            TextTrack::new("English", TrackKind::Subtitles),
            TextTrack::new("", TrackKind::Captions),
            TextTrack::new("Français", TrackKind::Subtitles),
        ]
    }

    fn modes(tracks: &[TextTrack]) -> Vec<TrackMode> {
        tracks.iter().map(|t| t.mode).collect()
    }

    #[test]
    fn rebuild_hides_all_and_lists_selectable_tracks() {
        let mut list = tracks();
        list.push(TextTrack::new("thumbs", TrackKind::Metadata));
        list[0].mode = TrackMode::Showing;
        let mut captions = CaptionsManager::new();
        captions.rebuild(&mut list);

        assert!(list.iter().all(|t| t.mode == TrackMode::Hidden));
        let labels: Vec<&str> = captions.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Off", "English", "Track 2", "Français"]);
        assert_eq!(captions.status_label(), "Off");
    }

    #[test]
    fn select_shows_exactly_one_track() {
        let mut list = tracks();
        let mut captions = CaptionsManager::new();
        captions.rebuild(&mut list);

        assert!(captions.select(Some(0), &mut list));
        assert!(captions.select(Some(2), &mut list));
        assert_eq!(
            modes(&list),
            vec![TrackMode::Hidden, TrackMode::Hidden, TrackMode::Showing]
        );
        assert_eq!(captions.status_label(), "Français");
        assert!(!captions.select(Some(2), &mut list));
    }

    #[test]
    fn toggle_twice_restores_choice() {
        let mut list = tracks();
        let mut captions = CaptionsManager::new();
        captions.rebuild(&mut list);
        captions.select(Some(1), &mut list);

        captions.toggle(&mut list);
        assert_eq!(captions.active(), None);
        assert!(list.iter().all(|t| t.mode != TrackMode::Showing));
        captions.toggle(&mut list);
        assert_eq!(captions.active(), Some(1));
        assert_eq!(captions.status_label(), "Track 2");
    }

    #[test]
    fn removed_active_track_resets_to_off() {
        let mut list = tracks();
        let mut captions = CaptionsManager::new();
        captions.rebuild(&mut list);
        captions.select(Some(2), &mut list);

        list.remove(2);
        captions.rebuild(&mut list);
        assert_eq!(captions.active(), None);
        assert_eq!(captions.status_label(), "Off");
    }

    #[test]
    fn surviving_active_track_follows_its_new_position() {
        let mut list = tracks();
        let mut captions = CaptionsManager::new();
        captions.rebuild(&mut list);
        captions.select(Some(2), &mut list);

        list.remove(0);
        captions.rebuild(&mut list);
        assert_eq!(captions.active(), Some(1));
        assert_eq!(list[1].mode, TrackMode::Showing);
        assert_eq!(list[0].mode, TrackMode::Hidden);
    }

    #[test]
    fn toggle_after_earlier_track_removed_restores_the_same_track() {
        let mut list = vec![
            TextTrack::new("English", TrackKind::Subtitles),
            TextTrack::new("German", TrackKind::Subtitles),
            TextTrack::new("Français", TrackKind::Subtitles),
        ];
        let mut captions = CaptionsManager::new();
        captions.rebuild(&mut list);
        captions.select(Some(2), &mut list);

        list.remove(0);
        captions.rebuild(&mut list);
        assert_eq!(captions.active(), Some(1));

        captions.toggle(&mut list);
        captions.toggle(&mut list);
        assert_eq!(captions.active(), Some(1));
        assert_eq!(captions.status_label(), "Français");
        assert_eq!(modes(&list), vec![TrackMode::Hidden, TrackMode::Showing]);
    }

    #[test]
    fn last_choice_follows_its_track_while_captions_are_off() {
        let mut list = vec![
            TextTrack::new("English", TrackKind::Subtitles),
            TextTrack::new("German", TrackKind::Subtitles),
            TextTrack::new("Français", TrackKind::Subtitles),
        ];
        let mut captions = CaptionsManager::new();
        captions.rebuild(&mut list);
        captions.select(Some(2), &mut list);
        captions.toggle(&mut list);
        assert_eq!(captions.active(), None);

        list.insert(0, TextTrack::new("Español", TrackKind::Subtitles));
        captions.rebuild(&mut list);
        captions.toggle(&mut list);
        assert_eq!(captions.active(), Some(3));
        assert_eq!(captions.status_label(), "Français");
    }

    #[test]
    fn removing_one_of_two_identical_tracks_turns_captions_off() {
        let mut list = vec![
            TextTrack::new("English", TrackKind::Subtitles),
            TextTrack::new("English", TrackKind::Subtitles),
        ];
        let mut captions = CaptionsManager::new();
        captions.rebuild(&mut list);
        captions.select(Some(0), &mut list);

        list.remove(0);
        captions.rebuild(&mut list);
        assert_eq!(captions.active(), None);
        assert_eq!(modes(&list), vec![TrackMode::Hidden]);
    }

    #[test]
    fn identical_tracks_are_told_apart_by_order() {
        let mut list = vec![
            TextTrack::new("English", TrackKind::Subtitles),
            TextTrack::new("English", TrackKind::Subtitles),
        ];
        let mut captions = CaptionsManager::new();
        captions.rebuild(&mut list);
        captions.select(Some(1), &mut list);

        list.insert(0, TextTrack::new("German", TrackKind::Subtitles));
        captions.rebuild(&mut list);
        assert_eq!(captions.active(), Some(2));
        assert_eq!(list[2].mode, TrackMode::Showing);
        assert_eq!(list[1].mode, TrackMode::Hidden);
    }

    #[test]
    fn toggle_falls_back_to_first_track_when_last_choice_is_gone() {
        let mut list = tracks();
        let mut captions = CaptionsManager::new();
        captions.rebuild(&mut list);
        captions.select(Some(2), &mut list);
        captions.toggle(&mut list);

        list.remove(2);
        list.push(TextTrack::new("Deutsch", TrackKind::Subtitles));
        captions.rebuild(&mut list);
        captions.toggle(&mut list);
        assert_eq!(captions.active(), Some(0));
    }

    #[test]
    fn metadata_and_missing_tracks_cannot_be_selected() {
        let mut list = vec![TextTrack::new("thumbs", TrackKind::Metadata)];
        let mut captions = CaptionsManager::new();
        captions.rebuild(&mut list);
        assert!(!captions.select(Some(0), &mut list));
        assert!(!captions.select(Some(7), &mut list));
        assert!(!captions.toggle(&mut list));
    }

    #[test]
    fn toggle_without_tracks_is_noop() {
        let mut list: Vec<TextTrack> = Vec::new();
        let mut captions = CaptionsManager::new();
        captions.rebuild(&mut list);
        assert!(!captions.has_tracks());
        assert!(!captions.toggle(&mut list));
    }
}

/// Cosmetic music-player state.
///
/// Mirrors the labels a music panel would show: a play/pause toggle, a
/// rotating track slot, and a volume flag. There is no audio backend and the
/// engine never sees this state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MusicControls {
    playing: bool,
    track: usize,
    volume_on: bool,
}

impl MusicControls {
    pub(crate) const TRACK_COUNT: usize = 5;

    pub(crate) fn new() -> Self {
        Self {
            playing: false,
            track: 0,
            volume_on: true,
        }
    }

    pub(crate) fn toggle_playback(&mut self) {
        self.playing = !self.playing;
    }

    /// Advances to the next of the fixed track slots, wrapping around.
    pub(crate) fn next_track(&mut self) {
        self.track = (self.track + 1) % Self::TRACK_COUNT;
    }

    pub(crate) fn toggle_volume(&mut self) {
        self.volume_on = !self.volume_on;
    }

    pub(crate) fn track(&self) -> usize {
        self.track
    }

    pub(crate) fn playback_label(&self) -> &'static str {
        if self.playing { "pause" } else { "play" }
    }

    pub(crate) fn volume_label(&self) -> &'static str {
        if self.volume_on { "vol on" } else { "muted" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_label_toggles() {
        let mut music = MusicControls::new();
        assert_eq!(music.playback_label(), "play");
        music.toggle_playback();
        assert_eq!(music.playback_label(), "pause");
        music.toggle_playback();
        assert_eq!(music.playback_label(), "play");
    }

    #[test]
    fn test_tracks_cycle_through_five_slots() {
        let mut music = MusicControls::new();
        let mut seen = vec![music.track()];
        for _ in 0..MusicControls::TRACK_COUNT {
            music.next_track();
            seen.push(music.track());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_volume_starts_on_and_toggles() {
        let mut music = MusicControls::new();
        assert_eq!(music.volume_label(), "vol on");
        music.toggle_volume();
        assert_eq!(music.volume_label(), "muted");
        music.toggle_volume();
        assert_eq!(music.volume_label(), "vol on");
    }
}

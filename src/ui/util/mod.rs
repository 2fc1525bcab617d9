pub mod handler;

use std::time::{SystemTime, UNIX_EPOCH};

use crate::audio::state::PlaybackState;

const FRAME_STEP_MS: u64 = 100;

/// Caption under the cover. While playing the dot pulses.
pub fn playback_caption(state: PlaybackState) -> String {
    match state {
        PlaybackState::Playing => {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default();
            format!("{} playing", pulse(now))
        }
        PlaybackState::Idle => "▶ click to play".to_string(),
        PlaybackState::Unavailable => "no preview".to_string(),
    }
}

fn pulse(now_ms: u64) -> &'static str {
    match (now_ms / FRAME_STEP_MS) % 6 {
        1 | 4 => "•",
        2 | 3 => "●",
        _ => "·",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_rises_and_falls() {
        let frames: Vec<&str> = (0..6).map(|i| pulse(i * FRAME_STEP_MS)).collect();
        assert_eq!(frames, vec!["·", "•", "●", "●", "•", "·"]);
    }

    #[test]
    fn captions_follow_state() {
        assert_eq!(playback_caption(PlaybackState::Unavailable), "no preview");
        assert!(playback_caption(PlaybackState::Playing).ends_with("playing"));
    }
}

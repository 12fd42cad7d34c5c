use serde::{Deserialize, Serialize};

use crate::types::Side;

/// Audio cues recorded by fighters as they act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    Attack,
    Hit,
    HeavyHit,
    RangedHit,
    Block,
    GuardBreak,
    Jump,
    Skill,
    Ultimate,
}

impl SoundCue {
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::Attack => "attack",
            SoundCue::Hit => "hit",
            SoundCue::HeavyHit => "heavy_hit",
            SoundCue::RangedHit => "ranged_hit",
            SoundCue::Block => "block",
            SoundCue::GuardBreak => "guard_break",
            SoundCue::Jump => "jump",
            SoundCue::Skill => "skill",
            SoundCue::Ultimate => "ultimate",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RoundOutcome {
    Winner { side: Side },
    Draw,
}

/// Round and match lifecycle notifications.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MatchEvent {
    RoundStart { round: u32 },
    RoundEnd { round: u32, outcome: RoundOutcome },
    MatchEnd { winner: String },
}

/// Playback target for sound cues. Implementations own any device state.
pub trait AudioSink {
    fn init(&mut self) {}
    fn play(&mut self, side: Side, cue: SoundCue);
    fn shutdown(&mut self) {}
}

/// Discards every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _side: Side, _cue: SoundCue) {}
}

/// Keeps every cue in order; handy in tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingAudio {
    pub played: Vec<(Side, SoundCue)>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, side: Side, cue: SoundCue) {
        self.played.push((side, cue));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_names_are_snake_case() {
        assert_eq!(SoundCue::GuardBreak.name(), "guard_break");
        assert_eq!(SoundCue::RangedHit.name(), "ranged_hit");
    }

    #[test]
    fn recording_sink_keeps_order() {
        let mut sink = RecordingAudio::default();
        sink.init();
        sink.play(Side::P1, SoundCue::Attack);
        sink.play(Side::P2, SoundCue::Block);
        sink.shutdown();
        assert_eq!(
            sink.played,
            vec![(Side::P1, SoundCue::Attack), (Side::P2, SoundCue::Block)]
        );
    }
}

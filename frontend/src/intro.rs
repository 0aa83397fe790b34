//! Timing of the logo intro shown once per page load.

pub const PULSE_AT_MS: u32 = 1_000;
pub const EXIT_AT_MS: u32 = 2_500;
pub const COMPLETE_AT_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroStage {
    Enter,
    Pulse,
    Exit,
}

impl IntroStage {
    pub fn class_name(self) -> &'static str {
        match self {
            IntroStage::Enter => "intro-enter",
            IntroStage::Pulse => "intro-pulse",
            IntroStage::Exit => "intro-exit",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroEvent {
    Stage(IntroStage),
    Complete,
}

/// Fixed schedule as (offset from mount, event).
pub const SCHEDULE: [(u32, IntroEvent); 3] = [
    (PULSE_AT_MS, IntroEvent::Stage(IntroStage::Pulse)),
    (EXIT_AT_MS, IntroEvent::Stage(IntroStage::Exit)),
    (COMPLETE_AT_MS, IntroEvent::Complete),
];

/// Tracks which scheduled events have fired so each fires once.
#[derive(Debug)]
pub struct IntroSequencer {
    stage: IntroStage,
    fired: usize,
}

impl Default for IntroSequencer {
    fn default() -> Self {
        Self {
            stage: IntroStage::Enter,
            fired: 0,
        }
    }
}

impl IntroSequencer {
    pub fn stage(&self) -> IntroStage {
        self.stage
    }

    /// Fires every event due by `elapsed_ms` that has not fired yet.
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<IntroEvent> {
        let mut due = Vec::new();
        while let Some((at, event)) = SCHEDULE.get(self.fired).copied() {
            if at > elapsed_ms {
                break;
            }
            if let IntroEvent::Stage(stage) = event {
                self.stage = stage;
            }
            self.fired += 1;
            due.push(event);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_by_elapsed_time() {
        let mut seq = IntroSequencer::default();
        for (t, expected) in [
            (0, IntroStage::Enter),
            (999, IntroStage::Enter),
            (1_000, IntroStage::Pulse),
            (2_499, IntroStage::Pulse),
            (2_500, IntroStage::Exit),
        ] {
            seq.advance(t);
            assert_eq!(seq.stage(), expected, "at {}ms", t);
        }
    }

    #[test]
    fn test_sequence_fires_in_order() {
        let mut seq = IntroSequencer::default();
        assert_eq!(seq.stage(), IntroStage::Enter);
        assert!(seq.advance(0).is_empty());
        assert_eq!(seq.advance(1_000), vec![IntroEvent::Stage(IntroStage::Pulse)]);
        assert_eq!(seq.stage(), IntroStage::Pulse);
        assert_eq!(seq.advance(2_500), vec![IntroEvent::Stage(IntroStage::Exit)]);
        assert!(seq.advance(2_999).is_empty());
        assert_eq!(seq.advance(3_000), vec![IntroEvent::Complete]);
        assert!(seq.advance(3_500).is_empty());
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut seq = IntroSequencer::default();
        let mut completions = 0;
        for t in (0..=6_000).step_by(250) {
            completions += seq
                .advance(t)
                .iter()
                .filter(|e| **e == IntroEvent::Complete)
                .count();
        }
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_late_tick_fires_everything_due() {
        let mut seq = IntroSequencer::default();
        let events = seq.advance(10_000);
        assert_eq!(
            events,
            vec![
                IntroEvent::Stage(IntroStage::Pulse),
                IntroEvent::Stage(IntroStage::Exit),
                IntroEvent::Complete
            ]
        );
        assert_eq!(seq.stage(), IntroStage::Exit);
    }
}

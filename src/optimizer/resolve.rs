//! Greedy string/fret assignment
//!
//! Each note is placed on the best-scoring string given where the previous
//! note was played. Notes are processed once, in order; a placement is never
//! revisited when later notes arrive.

use crate::errors::ConfigError;
use crate::models::pitch::PitchInput;
use crate::models::position::{AssignedPosition, Candidate, OptimizerState, TabNote};
use crate::optimizer::config::OptimizerConfig;
use crate::optimizer::scoring::score_candidate;

/// Places notes on the fretboard under a fixed configuration.
///
/// Holds no per-call state, so one instance can be shared across threads and
/// reused for any number of riffs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionOptimizer {
    config: OptimizerConfig,
}

impl PositionOptimizer {
    pub fn new(config: OptimizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(PositionOptimizer { config })
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Every string that can play `pitch`, best first.
    ///
    /// Ties keep string order, so the lower string index wins.
    pub fn rank_candidates(&self, pitch: i32, state: &OptimizerState) -> Vec<Candidate> {
        let max_fret = i32::from(self.config.max_fret);
        let stretch = i32::from(self.config.max_comfortable_stretch);

        let mut candidates: Vec<Candidate> = self
            .config
            .tuning
            .open_pitches()
            .iter()
            .enumerate()
            .filter_map(|(string, &open)| {
                let fret = pitch.checked_sub(open)?;
                if fret < 0 || fret > max_fret {
                    return None;
                }

                let movement = state.previous_fret.map(|prev| (fret - i32::from(prev)).abs());
                let string_delta = state
                    .previous_string
                    .map(|prev| (string as i32 - i32::from(prev)).abs());

                Some(Candidate {
                    string: string as u8,
                    fret: fret as u8,
                    score: score_candidate(fret, movement, string_delta, stretch),
                })
            })
            .collect();

        // sort_by is stable
        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        candidates
    }

    /// Best position for one pitch, or the unreachable sentinel
    pub fn resolve_position(&self, pitch: i32, state: &OptimizerState) -> AssignedPosition {
        match self.rank_candidates(pitch, state).first() {
            Some(best) => AssignedPosition::from(*best),
            None => {
                log::warn!("Pitch {} is unreachable on this tuning (max fret {})", pitch, self.config.max_fret);
                AssignedPosition::UNREACHABLE
            }
        }
    }

    /// `resolve_position` with the -1 "none" sentinels for the previous note
    pub fn find_optimal_position(&self, pitch: i32, previous_fret: i32, previous_string: i32) -> AssignedPosition {
        self.resolve_position(pitch, &OptimizerState::from_sentinels(previous_fret, previous_string))
    }

    /// Place a whole line of pitch numbers, one position per input note
    pub fn resolve_sequence(&self, pitches: &[i32]) -> Vec<AssignedPosition> {
        self.resolve_all(pitches.iter().map(|&p| Some(p)))
            .iter()
            .map(TabNote::position)
            .collect()
    }

    /// Like `resolve_sequence`, keeping each input pitch next to its placement
    pub fn resolve_riff(&self, pitches: &[i32]) -> Vec<TabNote> {
        self.resolve_all(pitches.iter().map(|&p| Some(p)))
    }

    /// Best position for a frequency in Hz
    pub fn resolve_frequency(&self, hz: f64, state: &OptimizerState) -> AssignedPosition {
        match PitchInput::Frequency(hz).to_pitch_number(self.config.reference_hz, self.config.reference_pitch) {
            Some(pitch) => self.resolve_position(pitch, state),
            None => {
                log::warn!("Frequency {} Hz has no pitch", hz);
                AssignedPosition::UNREACHABLE
            }
        }
    }

    /// Place a line given as frequencies in Hz
    pub fn resolve_frequency_sequence(&self, frequencies: &[f64]) -> Vec<TabNote> {
        let inputs: Vec<PitchInput> = frequencies.iter().map(|&hz| PitchInput::Frequency(hz)).collect();
        self.resolve_inputs(&inputs)
    }

    /// Place a line mixing pitch numbers and frequencies
    pub fn resolve_inputs(&self, inputs: &[PitchInput]) -> Vec<TabNote> {
        let reference_hz = self.config.reference_hz;
        let reference_pitch = self.config.reference_pitch;
        self.resolve_all(inputs.iter().map(|input| input.to_pitch_number(reference_hz, reference_pitch)))
    }

    /// Single greedy pass. `None` pitches come out unreachable.
    fn resolve_all<I>(&self, pitches: I) -> Vec<TabNote>
    where
        I: IntoIterator<Item = Option<i32>>,
    {
        let mut state = OptimizerState::new();
        let mut unreachable = 0;

        let notes: Vec<TabNote> = pitches
            .into_iter()
            .map(|pitch| {
                let position = match pitch {
                    Some(pitch) => self.resolve_position(pitch, &state),
                    None => AssignedPosition::UNREACHABLE,
                };
                if position.unreachable {
                    unreachable += 1;
                }
                state.advance(&position);
                TabNote::new(pitch, position)
            })
            .collect();

        log::debug!("Optimized {} note positions ({} unreachable)", notes.len(), unreachable);
        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tuning::Tuning;

    fn optimizer() -> PositionOptimizer {
        PositionOptimizer::default()
    }

    #[test]
    fn test_open_low_e_on_empty_state() {
        let position = optimizer().resolve_position(40, &OptimizerState::new());
        assert_eq!(position, AssignedPosition::placed(0, 0));
    }

    #[test]
    fn test_below_range_unreachable() {
        let position = optimizer().resolve_position(35, &OptimizerState::new());
        assert_eq!(position, AssignedPosition::UNREACHABLE);
    }

    #[test]
    fn test_above_range_unreachable() {
        let opt = optimizer();
        assert!(opt.resolve_position(83, &OptimizerState::new()).is_placed());
        assert!(opt.resolve_position(84, &OptimizerState::new()).unreachable);
    }

    #[test]
    fn test_extreme_pitches_unreachable() {
        let opt = optimizer();
        assert!(opt.resolve_position(i32::MIN, &OptimizerState::new()).unreachable);
        assert!(opt.resolve_position(i32::MAX, &OptimizerState::new()).unreachable);
    }

    #[test]
    fn test_rank_candidates_order_and_scores() {
        // 45 = A2: string 0 fret 5 (115), string 1 fret 0 (120)
        let ranked = optimizer().rank_candidates(45, &OptimizerState::new());
        assert_eq!(
            ranked,
            vec![
                Candidate { string: 1, fret: 0, score: 120 },
                Candidate { string: 0, fret: 5, score: 115 },
            ]
        );
    }

    #[test]
    fn test_ties_go_to_lower_string() {
        // Two strings tuned to the same pitch always tie
        let tuning = Tuning::new(&[40, 40, 50, 55, 59, 64]).unwrap();
        let opt = PositionOptimizer::new(OptimizerConfig::default().with_tuning(tuning)).unwrap();
        let ranked = opt.rank_candidates(43, &OptimizerState::new());
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].string, 0);
        assert_eq!(opt.resolve_position(43, &OptimizerState::new()), AssignedPosition::placed(0, 3));
    }

    #[test]
    fn test_find_optimal_position_sentinels() {
        let opt = optimizer();
        assert_eq!(
            opt.find_optimal_position(40, -1, -1),
            opt.resolve_position(40, &OptimizerState::new())
        );
        // Anchored high up the neck, 52 prefers string 1 fret 7 over open-ish options
        let state = OptimizerState { previous_fret: Some(7), previous_string: Some(1) };
        assert_eq!(opt.find_optimal_position(52, 7, 1), opt.resolve_position(52, &state));
        assert_eq!(opt.find_optimal_position(52, 7, 1), AssignedPosition::placed(1, 7));
    }

    #[test]
    fn test_resolve_position_is_pure() {
        let opt = optimizer();
        let state = OptimizerState::from_sentinels(5, 3);
        assert_eq!(opt.resolve_position(62, &state), opt.resolve_position(62, &state));
    }

    #[test]
    fn test_unreachable_keeps_previous_anchor() {
        let opt = optimizer();
        let notes = opt.resolve_sequence(&[52, 20, 53]);
        let direct = opt.resolve_sequence(&[52, 53]);
        assert!(notes[1].unreachable);
        assert_eq!(notes[0], direct[0]);
        assert_eq!(notes[2], direct[1]);
    }

    #[test]
    fn test_resolve_riff_keeps_pitches() {
        let notes = optimizer().resolve_riff(&[40, 35]);
        assert_eq!(notes[0].pitch, Some(40));
        assert_eq!(notes[1].pitch, Some(35));
        assert!(notes[1].unreachable);
    }

    #[test]
    fn test_resolve_frequency() {
        let opt = optimizer();
        assert_eq!(
            opt.resolve_frequency(82.41, &OptimizerState::new()),
            AssignedPosition::placed(0, 0)
        );
        assert_eq!(opt.resolve_frequency(0.0, &OptimizerState::new()), AssignedPosition::UNREACHABLE);
    }

    #[test]
    fn test_resolve_inputs_matches_numbers() {
        let opt = optimizer();
        let mixed = opt.resolve_inputs(&[
            PitchInput::Number(61),
            PitchInput::Frequency(207.65),
            PitchInput::Number(49),
        ]);
        let numbers = opt.resolve_riff(&[61, 56, 49]);
        assert_eq!(mixed, numbers);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(optimizer().resolve_sequence(&[]).is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = OptimizerConfig::default().with_reference(f64::NAN, 69);
        assert!(PositionOptimizer::new(config).is_err());
    }
}

//! Quadrature and absolute decoding state machines.
//!
//! This module implements the step-detection logic that turns a stream of
//! sampled encoder states into direction decisions. It is deliberately free
//! of any I/O: callers sample the sensor lines (see [`crate::sampler`]) and
//! feed one state per qualifying edge into [`QuadDecoder::update`] or
//! [`AbsoluteDecoder::update`].
//!
//! Three quadrature strategies are supported, selected once at construction:
//!
//! - [`DecodeMode::FullPeriod`]: one detent per full four-state cycle. The
//!   midpoint state arms the machine, the adjacent states record a
//!   provisional direction, and only a return to rest commits an event.
//!   Bounces that never cross the midpoint are rejected outright.
//! - [`DecodeMode::HalfPeriod`]: one detent per half cycle. Even states are
//!   the stable detents; odd states exist purely to disambiguate which of
//!   the two neighboring even states the encoder is moving toward.
//! - [`DecodeMode::QuarterPeriod`]: one detent per single state transition,
//!   the finest resolution. Only transitions between adjacent states emit;
//!   a non-adjacent jump is dropped but still moves the reference state so
//!   the next adjacent sample is judged from where the encoder actually is.
//!
//! Absolute multi-bit encoders skip the quadrature machinery entirely: the
//! raw bit pattern *is* the position, and decoding reduces to change
//! detection against the last reported value.

use crate::consts::{CLOCKWISE, COUNTER_CLOCKWISE, QUAD_STATES, QUAD_STATE_MASK};

/// Quadrature decoding strategy, fixed for the lifetime of an encoder.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum DecodeMode {
    /// One step per full four-state gray cycle.
    FullPeriod,
    /// One step per half cycle; even states are the commit boundaries.
    HalfPeriod,
    /// One step per single state transition.
    QuarterPeriod,
}

/// Step-detection state machine for two-line quadrature signals.
///
/// Feed one gray-decoded sample per qualifying edge into
/// [`update`](QuadDecoder::update); the return value is `Some(direction)`
/// exactly when the active strategy commits a step. Duplicate identical
/// samples never commit twice, so spurious repeated interrupts are harmless.
#[derive(Debug)]
pub struct QuadDecoder {
    mode: DecodeMode,

    /// Set once a transition sequence has begun and a terminal state is
    /// pending. Only meaningful in full-period mode.
    armed: bool,

    /// 1 - clockwise, -1 - counter-clockwise.
    dir: i8,

    /// The state most recently treated as stable. Half- and quarter-period
    /// decoding validate transitions against this reference.
    last_stable: u8,
}

impl QuadDecoder {
    /// Creates a decoder for `mode`, seeded with the currently sampled
    /// state.
    ///
    /// Full-period decoding keys off the rest state and ignores the seed;
    /// half- and quarter-period decoding need it so the first real
    /// transition is judged against the encoder's actual position.
    pub fn new(mode: DecodeMode, initial_state: u8) -> Self {
        Self {
            mode,
            armed: false,
            dir: 0,
            last_stable: initial_state & QUAD_STATE_MASK,
        }
    }

    /// The strategy this decoder was constructed with.
    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    /// Consumes one gray-decoded sample and returns the committed step
    /// direction, if any.
    pub fn update(&mut self, state: u8) -> Option<i8> {
        let state = state & QUAD_STATE_MASK;
        match self.mode {
            DecodeMode::FullPeriod => self.update_full(state),
            DecodeMode::HalfPeriod => self.update_half(state),
            DecodeMode::QuarterPeriod => self.update_quarter(state),
        }
    }

    fn update_full(&mut self, state: u8) -> Option<i8> {
        match state {
            0x0 => {
                // Back at rest; commit if the midpoint was crossed.
                if self.armed {
                    self.armed = false;
                    return Some(self.dir);
                }
                None
            }
            0x1 | 0x3 => {
                if self.armed {
                    self.dir = 2 - state as i8;
                }
                None
            }
            0x2 => {
                self.armed = true;
                None
            }
            _ => None,
        }
    }

    fn update_half(&mut self, state: u8) -> Option<i8> {
        if state & 1 != 0 {
            // Odd states carry direction but are never stable.
            self.dir =
                (self.last_stable.wrapping_sub(state).wrapping_add(1) % QUAD_STATES) as i8 - 1;
            None
        } else if state != self.last_stable {
            self.last_stable = state;
            Some(self.dir)
        } else {
            None
        }
    }

    fn update_quarter(&mut self, state: u8) -> Option<i8> {
        let step = if (self.last_stable + 1) % QUAD_STATES == state {
            self.dir = CLOCKWISE;
            Some(self.dir)
        } else if self.last_stable == (state + 1) % QUAD_STATES {
            self.dir = COUNTER_CLOCKWISE;
            Some(self.dir)
        } else {
            // Missed edge or bounce. The reference still advances so the
            // next adjacent sample is accepted instead of rejected forever.
            None
        };
        self.last_stable = state;
        step
    }
}

/// Change detector for absolute multi-bit encoders.
///
/// The raw line pattern is the position; an update that differs from the
/// last reported value is returned as the new position. Works identically
/// whether driven by edge interrupts or a poll tick.
#[derive(Debug, Default)]
pub struct AbsoluteDecoder {
    last_stable: u32,
}

impl AbsoluteDecoder {
    /// Creates a change detector with a zero reference state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one raw sample and returns it if it differs from the last
    /// reported value.
    pub fn update(&mut self, raw: u32) -> Option<u32> {
        if raw != self.last_stable {
            self.last_stable = raw;
            Some(raw)
        } else {
            None
        }
    }
}

/// The decode path active for an encoder instance.
///
/// Exactly one variant is chosen at construction and never changes; the
/// driver dispatches on it with a plain `match`.
#[derive(Debug)]
pub enum Decoder {
    /// Relative quadrature decoding in one of the three period modes.
    Quad(QuadDecoder),
    /// Absolute multi-bit change detection.
    Absolute(AbsoluteDecoder),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(decoder: &mut QuadDecoder, states: &[u8]) -> (usize, i8) {
        let mut events = 0;
        let mut last_dir = 0;
        for &state in states {
            if let Some(dir) = decoder.update(state) {
                events += 1;
                last_dir = dir;
            }
        }
        (events, last_dir)
    }

    #[test]
    fn test_full_period_clockwise_round_trip() {
        let mut decoder = QuadDecoder::new(DecodeMode::FullPeriod, 0);
        assert_eq!(feed(&mut decoder, &[0b00, 0b10, 0b01, 0b00]), (1, 1));
    }

    #[test]
    fn test_full_period_counter_clockwise_round_trip() {
        let mut decoder = QuadDecoder::new(DecodeMode::FullPeriod, 0);
        assert_eq!(feed(&mut decoder, &[0b00, 0b10, 0b11, 0b00]), (1, -1));
    }

    #[test]
    fn test_full_period_rejects_bounce() {
        let mut decoder = QuadDecoder::new(DecodeMode::FullPeriod, 0);
        assert_eq!(feed(&mut decoder, &[0b00, 0b10, 0b00]), (0, 0));
    }

    #[test]
    fn test_full_period_direction_states_need_arming() {
        let mut decoder = QuadDecoder::new(DecodeMode::FullPeriod, 0);
        // Direction states before the midpoint leave the machine untouched.
        assert_eq!(feed(&mut decoder, &[0b01, 0b11, 0b00]), (0, 0));
    }

    #[test]
    fn test_full_period_no_double_commit_on_repeated_rest() {
        let mut decoder = QuadDecoder::new(DecodeMode::FullPeriod, 0);
        assert_eq!(feed(&mut decoder, &[0b00, 0b10, 0b01, 0b00, 0b00]), (1, 1));
    }

    #[test]
    fn test_half_period_commits_on_even_change() {
        let mut decoder = QuadDecoder::new(DecodeMode::HalfPeriod, 0);
        let (events, _) = feed(&mut decoder, &[1, 2]);
        assert_eq!(events, 1);
        assert_eq!(decoder.last_stable, 2);
    }

    #[test]
    fn test_half_period_ignores_unchanged_even_state() {
        let mut decoder = QuadDecoder::new(DecodeMode::HalfPeriod, 0);
        assert_eq!(feed(&mut decoder, &[0, 0]), (0, 0));
    }

    #[test]
    fn test_half_period_odd_states_never_commit() {
        let mut decoder = QuadDecoder::new(DecodeMode::HalfPeriod, 0);
        assert_eq!(feed(&mut decoder, &[1, 3, 1]), (0, 0));
    }

    #[test]
    fn test_quarter_period_adjacent_forward() {
        let mut decoder = QuadDecoder::new(DecodeMode::QuarterPeriod, 0);
        assert_eq!(decoder.update(1), Some(1));
        assert_eq!(decoder.last_stable, 1);
    }

    #[test]
    fn test_quarter_period_adjacent_backward() {
        let mut decoder = QuadDecoder::new(DecodeMode::QuarterPeriod, 0);
        assert_eq!(decoder.update(3), Some(-1));
        assert_eq!(decoder.last_stable, 3);
    }

    #[test]
    fn test_quarter_period_nonadjacent_advances_reference() {
        let mut decoder = QuadDecoder::new(DecodeMode::QuarterPeriod, 0);
        assert_eq!(decoder.update(2), None);
        assert_eq!(decoder.last_stable, 2);
        // Adjacent from the new reference is accepted again.
        assert_eq!(decoder.update(3), Some(1));
    }

    #[test]
    fn test_quarter_period_repeated_sample_is_idempotent() {
        let mut decoder = QuadDecoder::new(DecodeMode::QuarterPeriod, 0);
        assert_eq!(decoder.update(1), Some(1));
        assert_eq!(decoder.update(1), None);
    }

    #[test]
    fn test_quarter_period_wraps_around_state_space() {
        let mut decoder = QuadDecoder::new(DecodeMode::QuarterPeriod, 3);
        assert_eq!(decoder.update(0), Some(1));
        assert_eq!(decoder.update(3), Some(-1));
    }

    #[test]
    fn test_absolute_reports_changes_only() {
        let mut decoder = AbsoluteDecoder::new();
        assert_eq!(decoder.update(0b101), Some(0b101));
        assert_eq!(decoder.update(0b101), None);
        assert_eq!(decoder.update(0b100), Some(0b100));
    }

    #[test]
    fn test_absolute_initial_zero_is_silent() {
        // The reference starts at zero, so an initial all-low read emits
        // nothing until the pattern first changes.
        let mut decoder = AbsoluteDecoder::new();
        assert_eq!(decoder.update(0), None);
        assert_eq!(decoder.update(1), Some(1));
    }
}

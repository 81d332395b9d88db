//! Constants used across the rotary encoder decoder.
//!
//! This module defines the shared values for direction reporting, the
//! quadrature state space, and poll-mode timing.
//!
//! ## Key Concepts
//!
//! - **Directions**: decoded steps are reported as signed units, `1` for
//!   clockwise and `-1` for counter-clockwise rotation.
//! - **State Space**: two phase-shifted sensor lines yield four gray-coded
//!   states per electrical period; all quadrature strategies operate on the
//!   low two bits of the gray-decoded sample.
//! - **Poll Timing**: absolute encoders on lines without interrupt capability
//!   fall back to periodic re-sampling at a fixed interval.

/// Direction unit for a clockwise step.
pub const CLOCKWISE: i8 = 1;

/// Direction unit for a counter-clockwise step.
pub const COUNTER_CLOCKWISE: i8 = -1;

/// Number of gray-coded states in one electrical period of a two-line
/// quadrature signal.
pub const QUAD_STATES: u8 = 4;

/// Mask selecting the low two bits of a gray-decoded sample.
///
/// Quadrature decoding only ever inspects the two least significant
/// channels; additional lines scale the steps-per-period ratio instead.
pub const QUAD_STATE_MASK: u8 = 0x3;

/// Minimum number of sensor lines required for any encoder.
pub const MIN_LINES: usize = 2;

/// Default re-sampling interval for poll-mode absolute encoders, in
/// microseconds.
pub const DEFAULT_POLL_PERIOD_US: u32 = 1_000;

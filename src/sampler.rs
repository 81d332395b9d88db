//! Sensor line sampling and gray-code conversion.
//!
//! A rotary encoder's two phase-shifted output lines form a 2-bit gray code:
//! adjacent rotational states differ in exactly one bit, so a single edge on
//! either line always moves the decoded state to a neighbor. This module
//! reads the instantaneous levels of all sensor lines and folds them into a
//! plain binary state value for the quadrature state machines, or into a raw
//! bit pattern for absolute encoders.
//!
//! Reads go through [`embedded_hal::digital::InputPin`] and may block
//! briefly; sleepy I/O expanders are fine as long as the caller runs in a
//! context that permits blocking. A failed read is treated as a low level so
//! the decode path itself stays infallible.

use crate::consts::QUAD_STATE_MASK;
use embedded_hal::digital::InputPin;

/// Converts a gray-coded value of `width` bits to plain binary.
///
/// Bits are processed most significant first; each bit after the first is
/// XORed with the previously decoded bit before insertion.
pub fn gray_to_binary(gray: u32, width: u32) -> u32 {
    let mut out: u32 = 0;
    for i in (0..width).rev() {
        let mut bit = (gray >> i) & 1;
        if out & 1 == 1 {
            bit ^= 1;
        }
        out = out << 1 | bit;
    }
    out
}

/// Samples all sensor lines and returns the gray-decoded quadrature state.
///
/// Lines are read in order, first line as the most significant bit, and
/// converted from gray encoding to normal binary on the fly. Only the low
/// two bits are returned; the result is always in `0..=3`.
pub fn sample_gray<P: InputPin>(lines: &mut [P]) -> u8 {
    let mut state: u8 = 0;
    for line in lines.iter_mut() {
        let mut level = u8::from(line.is_high().unwrap_or(false));
        if state & 1 == 1 {
            level ^= 1;
        }
        state = state << 1 | level;
    }
    state & QUAD_STATE_MASK
}

/// Samples all sensor lines and returns the raw concatenated bit pattern.
///
/// No gray conversion is applied; the first line becomes the most
/// significant bit. Absolute encoders report this value directly as their
/// position.
pub fn sample_raw<P: InputPin>(lines: &mut [P]) -> u32 {
    let mut state: u32 = 0;
    for line in lines.iter_mut() {
        state = state << 1 | u32::from(line.is_high().unwrap_or(false));
    }
    state
}

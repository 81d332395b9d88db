//! Scheduling glue for edge interrupts and poll ticks.
//!
//! The decoder itself is passive: something must call
//! [`RotaryEncoder::on_edge`](crate::driver::RotaryEncoder::on_edge) on
//! every qualifying line edge, or
//! [`RotaryEncoder::poll`](crate::driver::RotaryEncoder::poll) on a fixed
//! period for absolute encoders without interrupt-capable lines. This
//! module provides both approaches: ISR-shared globals guarded by
//! `critical_section::with` (`timer-isr` feature), and a blocking delay
//! loop (`delay-loop` feature).
//!
//! Contains helpers for polling- and ISR-based scheduling, including:
//! - `compute_ocr_value`: runtime OCR calculator for a poll-tick timer
//! - `const_ocr_value`: compile-time OCR calculator
//! - `run_poll_loop`: blocking poll loop for DelayNs (feature `delay-loop`)
//! - `global_encoder_edge` and the `edge_rotary_isr!()` wrapper
//!   (feature `timer-isr`)
//!
//! Common prescalers: (For use with `compute_ocr_value` and
//! `const_ocr_value`)
//!
//! | PRESCALER | TIMER_COUNTS | Overflow Interval |
//! |-----------|--------------|-------------------|
//! |        64 |          250 |              1 ms |
//! |       256 |          125 |              2 ms |
//! |       256 |          250 |              4 ms |
//! |      1024 |          125 |              8 ms |
//! |      1024 |          250 |             16 ms |

use libm::round;

#[cfg(feature = "delay-loop")]
mod delay;
#[cfg_attr(feature = "delay-loop", allow(unused_imports))]
#[cfg(feature = "delay-loop")]
pub use delay::*;

#[cfg(feature = "timer-isr")]
mod isr;
#[cfg_attr(feature = "timer-isr", allow(unused_imports))]
#[cfg(feature = "timer-isr")]
pub use isr::*;

#[cfg(feature = "timer-isr")]
mod macros;

/// 1,000,000 microseconds = 1 second
pub const MICROSECONDS_PER_SECOND: u32 = 1_000_000;

/// Computes the compare value for a CTC-mode timer driving the poll tick
///
/// # Arguments
/// - `f_cpu`: CPU frequency in Hz
/// - `prescaler`: timer prescaler (e.g., 8, 64, 256)
/// - `poll_us`: desired poll interval in microseconds (e.g., 1000.0)
///
/// # Returns
/// - Compare value for OCRnA (rounds to nearest integer)
pub fn compute_ocr_value(f_cpu: u32, prescaler: u32, poll_us: f32) -> u16 {
    let ticks_per_second: f32 = f_cpu as f32 / prescaler as f32;
    let ticks_per_poll: f32 = ticks_per_second * (poll_us / MICROSECONDS_PER_SECOND as f32);
    round(ticks_per_poll as f64) as u16
}

/// Compile-time poll-timer compare value calculator
///
/// # Arguments
/// - `f_cpu`: CPU frequency in Hz
/// - `prescaler`: timer prescaler (e.g., 8, 64, 256)
/// - `poll_us`: desired poll interval in microseconds (e.g., 1000)
///
/// # Returns
/// - Compare value for OCRnA (truncates toward zero)
pub const fn const_ocr_value(f_cpu: u32, prescaler: u32, poll_us: u32) -> u16 {
    ((f_cpu / prescaler) as u64 * poll_us as u64 / MICROSECONDS_PER_SECOND as u64) as u16
}

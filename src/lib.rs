//! # rotary-gpio
//!
//! A portable, no_std Rust driver for mechanical and magnetic rotary
//! encoders connected to GPIO lines, decoding their phase-shifted
//! gray-code outputs into discrete position and direction events.
//!
//! This driver implements the decoding entirely in software using:
//! - `embedded-hal` traits for digital I/O and timing
//! - a quadrature state machine with selectable full-, half- and
//!   quarter-period strategies
//! - interrupt-safe shared access with `critical-section`
//! - an optional polled fallback for absolute encoders on lines without
//!   interrupt capability
//!
//! ## Crate features
//! | Feature               | Description |
//! |-----------------------|-------------|
//! | `std`                 | Disables `#![no_std]` support |
//! | `delay-loop`          | Uses `embedded_hal::delay::DelayNs` for poll timing |
//! | `timer-isr` (default) | Uses `critical_section::with` for ISR-shared access |
//! | `defmt-0-3`           | Uses `defmt` logging |
//! | `log`                 | Uses `log` logging |
//!
//! ## Software Features
//!
//! - **Full-, half- and quarter-period** quadrature decoding, selected by
//!   the conventional `steps-per-period` configuration (with the deprecated
//!   `half-period` alias still honored)
//! - **Bounce rejection**: the full-period strategy only commits a step once
//!   a complete four-state cycle returns to rest
//! - **Absolute multi-bit encoders**: the raw line pattern is reported as
//!   the position, edge-driven or polled
//! - **Position bookkeeping** with wrap (rollover) or clamp semantics
//! - Fully portable across AVR and ARM Cortex-M targets
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rotary_gpio::config::EncoderConfig;
//! use rotary_gpio::driver::RotaryEncoder;
//!
//! let config = EncoderConfig {
//!     relative_axis: true,
//!     ..EncoderConfig::default()
//! };
//! let mut encoder = RotaryEncoder::new([a, b], sink, &config)?;
//!
//! // From each sensor line's edge interrupt (both edges):
//! encoder.on_edge();
//! ```
//!
//! Or, for an absolute encoder without interrupt-capable lines, use
//! `run_poll_loop()` with a `DelayNs` implementation:
//!
//! ```rust,ignore
//! rotary_gpio::timer::run_poll_loop(&mut encoder, &mut delay, 1_000);
//! ```
//!
//! ## Integration Notes
//!
//! - Configure every line interrupt to trigger on both rising and falling
//!   edges; each edge must result in exactly one `on_edge()` call.
//! - Line reads may block briefly, so handlers must run in contexts that
//!   permit blocking (threaded interrupts, not raw ISRs, on platforms where
//!   that distinction exists).
//! - All decoding for one encoder runs under a single lock; with the
//!   `timer-isr` feature that lock is the `critical_section` cell the
//!   encoder lives in.
//! - Deregister interrupts (take the encoder out of its cell) before
//!   dropping it.
//!
//! --
//! Designed for `#![no_std]` use in resource-constrained embedded
//! environments.

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "timer-isr")]
pub use critical_section;

pub mod config;
pub mod consts;
pub mod decoder;
pub mod driver;
pub mod error;
pub mod event;
pub mod sampler;
pub mod timer;

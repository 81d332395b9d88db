//! GPIO rotary encoder driver.
//!
//! This module provides the [`RotaryEncoder`] struct, which ties the sensor
//! lines, the decoding state machine and the event sink together into one
//! encoder instance. It uses `embedded-hal` traits for digital pin access,
//! allowing portability across a wide range of platforms.
//!
//! ## Decoding
//!
//! Each qualifying edge on any sensor line (both rising and falling) must
//! result in one call to [`on_edge()`](RotaryEncoder::on_edge). The driver
//! samples all lines, runs the configured decode strategy, and reports a
//! relative or absolute event through the sink when a step commits. For
//! absolute encoders on lines without interrupt capability,
//! [`poll()`](RotaryEncoder::poll) re-samples on a fixed period with the
//! same change-detection logic.
//!
//! ## Concurrency
//!
//! A single encoder may receive edge interrupts from several lines on
//! separate execution contexts. Decoding must be serialized per instance:
//! with the `timer-isr` feature, the driver lives in a
//! `critical_section::Mutex` cell and every entry point runs inside one
//! `critical_section::with` scope (see [`crate::timer`]). Handlers run in
//! contexts that permit blocking since line reads may sleep briefly.
//!
//! ## Teardown
//!
//! Disable and deregister the interrupt sources before dropping the
//! encoder; with the global-cell glue that means taking the instance out of
//! its cell first. [`release()`](RotaryEncoder::release) hands the lines
//! and the sink back for an orderly shutdown.
//!
//! ## Example
//!
//! ```rust
//! # use embedded_hal_mock::eh1::digital::{Mock as Pin, State as PinState, Transaction as PinTransaction};
//! use rotary_gpio::config::EncoderConfig;
//! use rotary_gpio::driver::RotaryEncoder;
//! use rotary_gpio::event::EventSink;
//!
//! struct LogSink;
//!
//! impl EventSink for LogSink {
//!     fn report_relative(&mut self, _axis: u16, _delta: i8) {}
//!     fn report_absolute(&mut self, _axis: u16, _position: u32) {}
//!     fn sync(&mut self) {}
//! }
//!
//! # let a = Pin::new(&[PinTransaction::get(PinState::Low)]);
//! # let b = Pin::new(&[PinTransaction::get(PinState::Low)]);
//! let config = EncoderConfig {
//!     relative_axis: true,
//!     ..EncoderConfig::default()
//! };
//! let mut encoder = RotaryEncoder::new([a, b], LogSink, &config).unwrap();
//!
//! // From each line's edge interrupt:
//! encoder.on_edge();
//! # let ([mut a, mut b], _) = encoder.release();
//! # a.done();
//! # b.done();
//! ```

use crate::config::EncoderConfig;
use crate::consts::MIN_LINES;
use crate::decoder::{AbsoluteDecoder, Decoder, DecodeMode, QuadDecoder};
use crate::error::ConfigError;
use crate::event::EventSink;
use crate::sampler::{sample_gray, sample_raw};
use embedded_hal::digital::InputPin;

/// Wake-capability control for a registered edge interrupt.
///
/// Implemented by the platform's interrupt handle. The encoder only toggles
/// wake arming across suspend and resume; it never touches the handler
/// registration itself.
pub trait WakeControl {
    /// Arms the interrupt as a wakeup source.
    fn enable_wake(&mut self);

    /// Disarms the interrupt as a wakeup source.
    fn disable_wake(&mut self);
}

/// A GPIO-connected rotary encoder instance.
///
/// One instance per physical encoder; different instances are fully
/// independent. The decode strategy, step count and axis are fixed at
/// construction for the lifetime of the instance.
///
/// ## Type Parameters
///
/// - `P`: sensor line type implementing [`embedded_hal::digital::InputPin`]
/// - `S`: event consumer implementing [`EventSink`]
/// - `N`: number of sensor lines (at least 2)
#[derive(Debug)]
pub struct RotaryEncoder<P, S, const N: usize>
where
    P: InputPin,
    S: EventSink,
{
    lines: [P; N],
    sink: S,
    decoder: Decoder,
    steps: u32,
    axis: u16,
    relative_axis: bool,
    rollover: bool,
    wakeup_source: bool,
    pos: u32,
}

impl<P, S, const N: usize> RotaryEncoder<P, S, N>
where
    P: InputPin,
    S: EventSink,
{
    /// Creates an encoder from its sensor lines, event sink and
    /// configuration.
    ///
    /// For half- and quarter-period decoding the lines are sampled once to
    /// seed the stable-state reference. Construction fails without touching
    /// any state when the configuration is unsupported; the error is fatal
    /// and not retried.
    pub fn new(mut lines: [P; N], sink: S, config: &EncoderConfig) -> Result<Self, ConfigError> {
        if N < MIN_LINES {
            return Err(ConfigError::NotEnoughLines);
        }

        let decoder = if config.absolute_encoder {
            Decoder::Absolute(AbsoluteDecoder::new())
        } else {
            let mode = config.decode_mode(N)?;
            let initial_state = match mode {
                DecodeMode::FullPeriod => 0,
                DecodeMode::HalfPeriod | DecodeMode::QuarterPeriod => sample_gray(&mut lines),
            };
            Decoder::Quad(QuadDecoder::new(mode, initial_state))
        };

        #[cfg(feature = "log")]
        log::debug!("decoder {:?} on {} lines, axis {}", decoder, N, config.axis);

        Ok(Self {
            lines,
            sink,
            decoder,
            steps: config.steps,
            axis: config.axis,
            relative_axis: config.relative_axis,
            rollover: config.rollover,
            wakeup_source: config.wakeup_source,
            pos: 0,
        })
    }

    /// Runs one decode step. Call from the edge interrupt of every sensor
    /// line, triggered on both rising and falling edges.
    ///
    /// Samples that match no valid transition are dropped silently; a
    /// repeated identical sample never produces a second event.
    pub fn on_edge(&mut self) {
        if matches!(self.decoder, Decoder::Absolute(_)) {
            self.absolute_tick();
            return;
        }

        let state = sample_gray(&mut self.lines);
        let Decoder::Quad(ref mut quad) = self.decoder else {
            return;
        };
        if let Some(dir) = quad.update(state) {
            self.report(dir);
        }
    }

    /// Runs one poll tick, re-sampling the lines and reporting any change.
    ///
    /// This is the fallback for absolute encoders whose lines lack
    /// interrupt capability; quadrature modes are edge-driven only and
    /// treat a poll tick as a no-op.
    pub fn poll(&mut self) {
        if matches!(self.decoder, Decoder::Absolute(_)) {
            self.absolute_tick();
        }
    }

    /// Shared absolute decode path for edge interrupts and poll ticks.
    fn absolute_tick(&mut self) {
        let raw = sample_raw(&mut self.lines);
        let Decoder::Absolute(ref mut absolute) = self.decoder else {
            return;
        };
        if let Some(position) = absolute.update(raw) {
            self.sink.report_absolute(self.axis, position);
            self.sink.sync();
        }
    }

    /// Applies position bookkeeping and emits one event for a committed
    /// step.
    fn report(&mut self, dir: i8) {
        if self.relative_axis {
            self.sink.report_relative(self.axis, dir);
        } else {
            let mut pos = self.pos;

            if dir < 0 {
                // Turning counter-clockwise. With rollover the position is
                // biased up by one full turn first so it cannot go negative
                // before the modulo.
                if self.rollover {
                    pos += self.steps;
                }
                if pos > 0 {
                    pos -= 1;
                }
            } else {
                // Turning clockwise; clamp at `steps` unless rolling over.
                if self.rollover || pos < self.steps {
                    pos += 1;
                }
            }

            if self.rollover {
                pos %= self.steps;
            }

            self.pos = pos;
            self.sink.report_absolute(self.axis, pos);
        }

        self.sink.sync();
    }

    /// Current position. Only advanced in absolute axis mode.
    pub fn position(&self) -> u32 {
        self.pos
    }

    /// Active quadrature decode mode, `None` for absolute encoders.
    pub fn mode(&self) -> Option<DecodeMode> {
        match self.decoder {
            Decoder::Quad(ref quad) => Some(quad.mode()),
            Decoder::Absolute(_) => None,
        }
    }

    /// Arms the line interrupts as wakeup sources on system suspend.
    ///
    /// Pure pass-through to the interrupt handles; a no-op unless the
    /// encoder was configured as a wakeup source. Decoder state is not
    /// touched.
    pub fn suspend<W: WakeControl>(&self, irqs: &mut [W]) {
        if self.wakeup_source {
            for irq in irqs.iter_mut() {
                irq.enable_wake();
            }
        }
    }

    /// Disarms the line interrupts as wakeup sources on system resume.
    pub fn resume<W: WakeControl>(&self, irqs: &mut [W]) {
        if self.wakeup_source {
            for irq in irqs.iter_mut() {
                irq.disable_wake();
            }
        }
    }

    /// Tears the encoder down, handing the sensor lines and the sink back.
    ///
    /// Deregister the interrupt sources before calling this so no decode
    /// callback can fire on a released instance.
    pub fn release(self) -> ([P; N], S) {
        (self.lines, self.sink)
    }
}

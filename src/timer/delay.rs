use crate::driver::RotaryEncoder;
use crate::event::EventSink;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

/// Runs a blocking loop that repeatedly polls the provided encoder.
///
/// This is the fallback for absolute encoders whose sensor lines lack
/// interrupt capability: instead of reacting to edges, the lines are
/// re-sampled on a fixed period with identical change-detection logic. It
/// drives the timing using a delay provider implementing
/// `embedded_hal::delay::DelayNs`.
///
/// # Arguments
/// - `encoder`: A mutable reference to a `RotaryEncoder` instance.
/// - `delay`: A delay provider implementing `DelayNs`, typically from the HAL.
/// - `poll_us`: The delay between poll ticks, in microseconds (e.g.
///   [`DEFAULT_POLL_PERIOD_US`](crate::consts::DEFAULT_POLL_PERIOD_US)).
///
/// # Notes
/// - This loop will never return; it is intended for single-purpose polling
///   firmware. For anything concurrent, drive `poll()` from a timer
///   interrupt instead (see the `timer-isr` helpers).
/// - Quadrature modes are edge-driven only; polling such an encoder does
///   nothing.
pub fn run_poll_loop<D: DelayNs, P, S, const N: usize>(
    encoder: &mut RotaryEncoder<P, S, N>,
    delay: &mut D,
    poll_us: u32,
) where
    P: InputPin,
    S: EventSink,
{
    #[cfg(feature = "log")]
    log::debug!("using poll mode, period {} us", poll_us);

    loop {
        encoder.poll();
        delay.delay_us(poll_us);
    }
}

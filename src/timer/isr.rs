use crate::driver::RotaryEncoder;
use crate::event::EventSink;
use core::cell::RefCell;
use critical_section::Mutex;
use embedded_hal::digital::InputPin;

/// Used to initialize the global static `RotaryEncoder` for use with
/// `critical_section`.
///
/// The cell doubles as the encoder's mutual-exclusion lock: every entry
/// point below runs inside one `critical_section::with` scope, so edge
/// interrupts from different sensor lines are serialized against each other
/// and against poll ticks.
///
/// # Returns
/// * An empty mutable ref-cell
///
/// # Example
/// ```rust,ignore
/// use core::cell::RefCell;
/// use critical_section::Mutex;
/// use rotary_gpio::driver::RotaryEncoder;
/// use rotary_gpio::timer::global_encoder_init;
///
/// static ENCODER: Mutex<RefCell<Option<RotaryEncoder<PD1, MySink, 2>>>> =
///     global_encoder_init::<PD1, MySink, 2>();
/// ```
pub const fn global_encoder_init<P: InputPin, S: EventSink, const N: usize>()
-> Mutex<RefCell<Option<RotaryEncoder<P, S, N>>>> {
    Mutex::new(RefCell::new(None))
}

/// Places a constructed encoder into its global cell.
///
/// Construction is fallible, so unlike the cell itself this cannot happen
/// in a const context; build the encoder first, then hand it over.
///
/// # Example
/// ```rust,ignore
/// fn main() {
///     let encoder = RotaryEncoder::new([a, b], sink, &config).unwrap();
///     global_encoder_setup(&ENCODER, encoder);
/// }
/// ```
pub fn global_encoder_setup<P: InputPin, S: EventSink, const N: usize>(
    global_encoder: &'static Mutex<RefCell<Option<RotaryEncoder<P, S, N>>>>,
    encoder: RotaryEncoder<P, S, N>,
) {
    critical_section::with(|cs| {
        let _ = global_encoder.borrow(cs).replace(Some(encoder));
    });
}

/// Runs one decode step on the shared encoder.
///
/// Call from the GPIO interrupt of every sensor line, with the interrupt
/// configured to trigger on both rising and falling edges.
///
/// # Example
/// ```rust,ignore
/// #[interrupt]
/// fn GPIO_EDGE() {
///     global_encoder_edge(&ENCODER);
/// }
/// ```
pub fn global_encoder_edge<P: InputPin, S: EventSink, const N: usize>(
    global_encoder: &'static Mutex<RefCell<Option<RotaryEncoder<P, S, N>>>>,
) {
    critical_section::with(|cs| {
        if let Some(encoder) = global_encoder.borrow(cs).borrow_mut().as_mut() {
            encoder.on_edge();
        }
    });
}

/// Runs one poll tick on the shared encoder.
///
/// Call from a periodic timer interrupt when driving an absolute encoder
/// without interrupt-capable lines.
///
/// # Example
/// ```rust,ignore
/// #[interrupt]
/// fn TIM2() {
///     global_encoder_poll_tick(&ENCODER);
/// }
/// ```
pub fn global_encoder_poll_tick<P: InputPin, S: EventSink, const N: usize>(
    global_encoder: &'static Mutex<RefCell<Option<RotaryEncoder<P, S, N>>>>,
) {
    critical_section::with(|cs| {
        if let Some(encoder) = global_encoder.borrow(cs).borrow_mut().as_mut() {
            encoder.poll();
        }
    });
}

/// Takes the shared encoder back out of its cell for teardown.
///
/// Disable the interrupt sources first, then call this; once the cell is
/// empty no late interrupt can reach the instance, and the returned encoder
/// can be [`release`](RotaryEncoder::release)d to recover the lines.
pub fn global_encoder_teardown<P: InputPin, S: EventSink, const N: usize>(
    global_encoder: &'static Mutex<RefCell<Option<RotaryEncoder<P, S, N>>>>,
) -> Option<RotaryEncoder<P, S, N>> {
    critical_section::with(|cs| global_encoder.borrow(cs).take())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EncoderConfig;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    #[derive(Debug)]
    struct NullSink;

    impl EventSink for NullSink {
        fn report_relative(&mut self, _axis: u16, _delta: i8) {}
        fn report_absolute(&mut self, _axis: u16, _position: u32) {}
        fn sync(&mut self) {}
    }

    static ENCODER: Mutex<RefCell<Option<RotaryEncoder<PinMock, NullSink, 2>>>> =
        global_encoder_init();

    #[test]
    fn test_global_cell_round_trip() {
        // One decode step samples each line once; the poll tick is a no-op
        // for quadrature modes and reads nothing.
        let a = PinMock::new(&[PinTransaction::get(PinState::Low)]);
        let b = PinMock::new(&[PinTransaction::get(PinState::Low)]);
        let config = EncoderConfig {
            relative_axis: true,
            ..EncoderConfig::default()
        };
        let encoder = RotaryEncoder::new([a, b], NullSink, &config).unwrap();

        global_encoder_setup(&ENCODER, encoder);
        global_encoder_edge(&ENCODER);
        global_encoder_poll_tick(&ENCODER);

        let encoder = global_encoder_teardown(&ENCODER).unwrap();
        assert!(global_encoder_teardown(&ENCODER).is_none());

        let ([mut a, mut b], _) = encoder.release();
        a.done();
        b.done();
    }
}

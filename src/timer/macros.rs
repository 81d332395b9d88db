/// Declares a static global `ROTARY_ENCODER` instance protected by a
/// `critical_section` mutex.
///
/// This macro creates a `static` singleton `ROTARY_ENCODER` suitable for use
/// in interrupt-based environments, where several line ISRs and the main
/// thread need to safely access the shared encoder state.
///
/// # Arguments
/// - `$pin`: The concrete type of the sensor lines (must implement
///   `InputPin`)
/// - `$sink`: The concrete type of the event sink (must implement
///   `EventSink`)
/// - `$n`: The number of sensor lines
///
/// # Example
/// ```rust,ignore
/// init_rotary_encoder!(MyPinType, MySinkType, 2);
/// ```
#[macro_export]
macro_rules! init_rotary_encoder {
    ( $pin:ty, $sink:ty, $n:expr ) => {
        pub static ROTARY_ENCODER: $crate::critical_section::Mutex<
            core::cell::RefCell<Option<$crate::driver::RotaryEncoder<$pin, $sink, $n>>>,
        > = $crate::critical_section::Mutex::new(core::cell::RefCell::new(None));
    };
}

/// Initializes the global `ROTARY_ENCODER` singleton with a constructed
/// encoder.
///
/// Construction is fallible, so the encoder is built first and only handed
/// over on success.
///
/// # Example
/// ```rust,ignore
/// fn main() {
///     let encoder = RotaryEncoder::new([a, b], sink, &config).unwrap();
///     setup_rotary_encoder!(encoder);
/// }
/// ```
///
/// # Notes
/// - Requires `init_rotary_encoder!` to have been used earlier.
#[macro_export]
macro_rules! setup_rotary_encoder {
    ( $encoder:expr ) => {
        $crate::critical_section::with(|cs| {
            let _ = ROTARY_ENCODER.borrow(cs).replace(Some($encoder));
        });
    };
}

/// Runs one decode step on the global `ROTARY_ENCODER` if it has been
/// initialized.
///
/// This macro is intended to be invoked from the GPIO interrupt of every
/// sensor line, with the interrupt triggering on both rising and falling
/// edges.
///
/// # Example
/// ```rust,ignore
/// #[interrupt]
/// fn GPIO_EDGE() {
///     edge_rotary_isr!();
/// }
/// ```
///
/// # Notes
/// - Safe to call repeatedly — will silently do nothing if the encoder
///   hasn't been set up yet.
#[macro_export]
macro_rules! edge_rotary_isr {
    () => {
        $crate::critical_section::with(|cs| {
            if let Some(encoder) = ROTARY_ENCODER.borrow(cs).borrow_mut().as_mut() {
                encoder.on_edge();
            }
        });
    };
}

/// Runs one poll tick on the global `ROTARY_ENCODER` if it has been
/// initialized.
///
/// Intended for a periodic timer ISR driving an absolute encoder whose
/// lines lack interrupt capability.
///
/// # Example
/// ```rust,ignore
/// #[interrupt]
/// fn TIM2() {
///     poll_rotary_timer!();
/// }
/// ```
#[macro_export]
macro_rules! poll_rotary_timer {
    () => {
        $crate::critical_section::with(|cs| {
            if let Some(encoder) = ROTARY_ENCODER.borrow(cs).borrow_mut().as_mut() {
                encoder.poll();
            }
        });
    };
}

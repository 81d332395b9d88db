//! Event sink interface between the decoder and the input-event consumer.
//!
//! The driver does not know where decoded motion ends up; it only pushes
//! events through this trait. Typical implementations forward to an input
//! subsystem, a HID report builder, or an application channel.
//!
//! Sinks are infallible from the decoder's point of view. If delivery can
//! fail downstream, the sink implementation owns that problem; the decode
//! path never retries and never surfaces sink errors.

/// Consumer of decoded encoder events.
///
/// One [`sync`](EventSink::sync) call follows every reported event, marking
/// the end of an event packet so consumers that batch reports know when to
/// flush.
pub trait EventSink {
    /// Reports a relative step of `delta` (`1` clockwise, `-1`
    /// counter-clockwise) on `axis`.
    fn report_relative(&mut self, axis: u16, delta: i8);

    /// Reports the absolute `position` on `axis`.
    fn report_absolute(&mut self, axis: u16, position: u32);

    /// Flushes any queued events to the consumer.
    fn sync(&mut self);
}

use crate::frame::Frame;

/// Possible errors from the DHT11 driver.
#[derive(Debug, PartialEq, Eq)]
pub enum DhtError<E> {
    /// The sensor never acknowledged the start signal.
    NoResponse,
    /// Timed out waiting for a pin state change mid-frame.
    Timeout,
    /// Checksum did not match the received data. Carries the raw frame so
    /// the caller can inspect what arrived.
    ChecksumMismatch(Frame),
    /// Error from the GPIO pin (input/output).
    PinError(E),
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::PinError(value)
    }
}

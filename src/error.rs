/// Possible errors from the DHT11 driver.
///
/// Each decode stage fails with its own kind so callers can tell a transient
/// capture problem (retry after the sensor's rest interval) from a persistent
/// data-integrity problem worth investigating at the wiring level.
#[derive(Debug, PartialEq, Eq)]
pub enum DhtError<E> {
    /// The capture loop wrote fewer samples than requested.
    CaptureFault,
    /// The capture buffer contained no data pulses at all.
    NoData,
    /// The transmission carried the wrong number of bits; holds the
    /// observed count.
    FrameLengthMismatch(usize),
    /// Checksum did not match the received data.
    ChecksumMismatch,
    /// Error from the GPIO pin (input/output).
    PinError(E),
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::PinError(value)
    }
}

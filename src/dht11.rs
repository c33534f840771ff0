use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::error::DhtError;
use crate::frame::{self, FRAME_BITS, FRAME_BYTES};
use crate::interrupt::{InterruptControl, SuspendGuard};
use crate::pulse;

/// Number of line samples captured per read.
///
/// Covers the sensor's full 40-bit transmission at the capture cadence.
/// A multiple of 4, since the capture loop stores samples in groups of 4.
const SAMPLE_BUFFER_LEN: usize = 320;

/// Busy-wait between consecutive line samples, in microseconds.
///
/// Calibrated so that four read-delay cycles span roughly the shortest high
/// pulse the sensor produces.
const SAMPLE_DELAY_US: u32 = 8;

/// Line-high settle time before the start signal, in milliseconds.
const SETTLE_MS: u32 = 50;

/// Start-signal low hold, in milliseconds.
const START_LOW_MS: u32 = 20;

/// Driver for the DHT11 temperature and humidity sensor.
pub struct Dht11<PIN, D, I> {
    pin: PIN,
    delay: D,
    irq: I,
}

/// Reading returned by the DHT11 sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub relative_humidity: f32,
}

impl<PIN, DELAY, IRQ, E> Dht11<PIN, DELAY, IRQ>
where
    PIN: InputPin<Error = E> + OutputPin<Error = E>,
    DELAY: DelayNs,
    IRQ: InterruptControl,
{
    /// Creates a new instance of the DHT11 driver.
    ///
    /// # Arguments
    ///
    /// * `pin` - The GPIO pin connected to the DHT11 data line. Must support
    ///   both input and output, wired open-drain with an external pull-up.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    /// * `irq` - Interrupt control used to keep the capture cadence uniform.
    ///   Pass [`NoopInterruptControl`](crate::NoopInterruptControl) where
    ///   masking is unnecessary.
    pub fn new(pin: PIN, delay: DELAY, irq: IRQ) -> Self {
        Dht11 { pin, delay, irq }
    }

    /// Reads a temperature and humidity measurement from the DHT11 sensor.
    ///
    /// This method performs one complete read cycle: sending the start
    /// signal, capturing the data line at a fixed cadence with interrupts
    /// suspended, classifying the pulse runs, decoding the 40 bits with the
    /// frame's adaptive threshold, and validating the checksum.
    ///
    /// The sensor needs at least 2 seconds between reads. The driver does
    /// not enforce the interval; callers must.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` if a complete frame was captured and the checksum is
    ///   valid.
    /// * `Err(DhtError)` if the capture, framing, or checksum failed, or a
    ///   pin error occurred. None of the kinds is fatal; waiting out the
    ///   sensor's rest interval and reading again is the expected response.
    pub fn read(&mut self) -> Result<Reading, DhtError<E>> {
        let mut samples = [0u8; SAMPLE_BUFFER_LEN];

        let captured = self.capture(&mut samples)?;
        if captured != SAMPLE_BUFFER_LEN / 4 * 4 {
            return Err(DhtError::CaptureFault);
        }

        let bits = pulse::classify_pulses(&samples);
        if bits.is_empty() {
            return Err(DhtError::NoData);
        }
        let lengths: &[u16; FRAME_BITS] = bits
            .as_slice()
            .try_into()
            .map_err(|_| DhtError::FrameLengthMismatch(bits.len()))?;

        let frame = frame::assemble(lengths);
        if frame[4] != frame::checksum(&frame) {
            return Err(DhtError::ChecksumMismatch);
        }

        Ok(self.parse_frame(frame))
    }

    /// Converts a validated frame into a `Reading`.
    fn parse_frame(&self, frame: [u8; FRAME_BYTES]) -> Reading {
        let [hum_int, hum_frac, temp_int, temp_frac, _checksum] = frame;

        Reading {
            temperature: temp_int as f32 + temp_frac as f32 / 10.0,
            relative_humidity: hum_int as f32 + hum_frac as f32 / 10.0,
        }
    }

    /// Fills `buf` with line samples at the fixed capture cadence and
    /// returns the number of samples written.
    ///
    /// Sends the start signal first: the line is held high to settle, pulled
    /// low long enough for the sensor to notice, then released so the
    /// pull-up raises it while the sensor answers. Interrupts stay suspended
    /// from the start assertion until the buffer is full, and are restored
    /// on every exit path, including pin errors propagated from the loop.
    fn capture(&mut self, buf: &mut [u8; SAMPLE_BUFFER_LEN]) -> Result<usize, DhtError<E>> {
        let len = buf.len() / 4 * 4;
        // Padding past the captured window reads as pulled-up line, so the
        // classifier never sees a false trailing edge.
        for slot in buf[len..].iter_mut() {
            *slot = 1;
        }

        self.pin.set_high()?;
        self.delay.delay_ms(SETTLE_MS);

        let Self { pin, delay, irq } = self;
        let _guard = SuspendGuard::new(irq);

        pin.set_low()?;
        delay.delay_ms(START_LOW_MS);
        pin.set_high()?;

        let mut written = 0;
        while written < len {
            for slot in buf[written..written + 4].iter_mut() {
                *slot = u8::from(pin.is_high()?);
                delay.delay_us(SAMPLE_DELAY_US);
            }
            written += 4;
        }

        Ok(written)
    }
}

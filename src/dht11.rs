use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::error::DhtError;
use crate::frame::{Frame, Reading};

/// Maximum time to wait (in microseconds) for the pin to change state.
///
/// Used to detect timeouts when waiting for the DHT11 to respond.
const TIMEOUT_US: u8 = 100;

/// Minimum interval between two measurement cycles, in milliseconds.
///
/// The DHT11 needs time to settle between conversions; cycles started
/// sooner than this tend to come back as [`DhtError::NoResponse`]. Pacing
/// reads is the polling loop's job, not the driver's.
pub const MIN_READ_INTERVAL_MS: u32 = 2000;

/// Driver for the DHT11 temperature and humidity sensor.
pub struct Dht11<PIN, D> {
    pin: PIN,
    delay: D,
}

impl<PIN, DELAY, E> Dht11<PIN, DELAY>
where
    PIN: InputPin<Error = E> + OutputPin<Error = E>,
    DELAY: DelayNs,
{
    /// Creates a new instance of the DHT11 driver.
    ///
    /// # Arguments
    ///
    /// * `pin` - The GPIO pin connected to the DHT11 data line. Must support both input and output.
    /// * `delay` - A delay provider implementing the `DelayNs` trait. The platform HAL calibrates
    ///   it against the processor clock, so the same driver works across clock speeds.
    pub fn new(pin: PIN, delay: DELAY) -> Self {
        Dht11 { pin, delay }
    }

    /// Performs one measurement cycle on the DHT11 sensor.
    ///
    /// This method runs the complete communication sequence: sending the
    /// start signal, checking the sensor's response handshake, reading the
    /// 5-byte frame, validating the checksum, and decoding the result.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` if the read is successful and the checksum is valid.
    /// * `Err(DhtError)` if the sensor does not respond, a wait expires
    ///   mid-frame, the checksum does not match, or the pin itself fails.
    pub fn read(&mut self) -> Result<Reading, DhtError<E>> {
        self.start()?;
        self.check_response()?;

        let mut bytes = [0u8; 5];
        for b in bytes.iter_mut() {
            *b = self.read_byte()?;
        }

        let frame = Frame::new(bytes);
        if !frame.is_valid() {
            Err(DhtError::ChecksumMismatch(frame))
        } else {
            Ok(frame.decode())
        }
    }

    /// Sends the start signal to the DHT11.
    ///
    /// The line is held low for 18 ms (the sensor's minimum reset window),
    /// then driven high for 30 us before it is released to the sensor.
    fn start(&mut self) -> Result<(), DhtError<E>> {
        self.pin.set_low()?;
        self.delay.delay_ms(18);
        self.pin.set_high()?;
        self.delay.delay_us(30);
        Ok(())
    }

    /// Checks the sensor's acknowledgment pulse.
    ///
    /// After the start signal the sensor answers with ~80 us low followed by
    /// ~80 us high. The line is sampled 40 us in (must be low) and again
    /// 80 us later (must be high); either sample failing means the sensor
    /// never acknowledged.
    fn check_response(&mut self) -> Result<(), DhtError<E>> {
        self.delay.delay_us(40);
        if self.pin.is_high()? {
            return Err(DhtError::NoResponse);
        }

        self.delay.delay_us(80);
        if self.pin.is_low()? {
            return Err(DhtError::NoResponse);
        }

        // The sensor finishes its acknowledgment pulse before the first bit slot.
        self.wait_for_low()
    }

    /// Reads one byte (8 bits, MSB first) from the sensor.
    ///
    /// # Returns
    ///
    /// * `Ok(u8)` with the read byte
    /// * `Err(DhtError)` on communication failure
    fn read_byte(&mut self) -> Result<u8, DhtError<E>> {
        let mut byte: u8 = 0;

        for i in 0..8 {
            let bit_mask = 1 << (7 - i);
            if self.read_bit()? {
                byte |= bit_mask;
            }
        }

        Ok(byte)
    }

    /// Reads a single bit from the sensor.
    ///
    /// Each bit slot starts with the line going high; the level 40 us into
    /// the slot encodes the bit value.
    fn read_bit(&mut self) -> Result<bool, DhtError<E>> {
        // Start of the bit slot
        self.wait_for_high()?;

        // Sample partway through the slot. Still high means bit value 1.
        self.delay.delay_us(40);
        let bit_is_one = self.pin.is_high()?;

        // End of the bit slot
        self.wait_for_low()?;

        Ok(bit_is_one)
    }

    /// Waits until the data line goes high or times out.
    fn wait_for_high(&mut self) -> Result<(), DhtError<E>> {
        Self::wait_for_state(&mut self.delay, || self.pin.is_high())
    }

    /// Waits until the data line goes low or times out.
    fn wait_for_low(&mut self) -> Result<(), DhtError<E>> {
        Self::wait_for_state(&mut self.delay, || self.pin.is_low())
    }

    /// Generic wait loop that checks a pin condition until true or timeout.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay provider
    /// * `condition` - Closure that returns true when the expected condition is met
    ///
    /// # Errors
    ///
    /// Returns `DhtError::Timeout` if the timeout is exceeded
    fn wait_for_state<F>(delay: &mut DELAY, mut condition: F) -> Result<(), DhtError<E>>
    where
        F: FnMut() -> Result<bool, E>,
    {
        for _ in 0..TIMEOUT_US {
            if condition()? {
                return Ok(());
            }
            delay.delay_us(1);
        }
        Err(DhtError::Timeout)
    }
}

//! Raw input sampling.
//!
//! The driver never touches hardware directly. Each tick it asks an
//! [`EncoderSampler`] for the current two-bit quadrature code and the
//! current button level. Reads happen in the tick context (often an
//! interrupt), so implementations must be fast and must not block.

use embedded_hal::digital::InputPin;

/// Quadrature code reported while the encoder rests in a detent.
pub const DETENT_CODE: u8 = 0b11;

/// Source of raw encoder and button samples.
///
/// Any state an implementation needs (pins, register handles, a shared
/// context) lives in the implementor itself.
pub trait EncoderSampler {
    /// Current raw quadrature code. Only the low two bits are used.
    fn rotation_code(&mut self) -> u8;

    /// Current raw button level, `true` when pressed. Not debounced.
    fn button_pressed(&mut self) -> bool;
}

impl<T: EncoderSampler + ?Sized> EncoderSampler for &mut T {
    fn rotation_code(&mut self) -> u8 {
        (**self).rotation_code()
    }

    fn button_pressed(&mut self) -> bool {
        (**self).button_pressed()
    }
}

/// Sampler built from two closures.
///
/// ```
/// use polled_encoder::FnSampler;
///
/// let sampler = FnSampler::new(|| 0b11, || false);
/// ```
pub struct FnSampler<R, B> {
    rotation: R,
    button: B,
}

impl<R, B> FnSampler<R, B>
where
    R: FnMut() -> u8,
    B: FnMut() -> bool,
{
    pub fn new(rotation: R, button: B) -> Self {
        Self { rotation, button }
    }
}

impl<R, B> EncoderSampler for FnSampler<R, B>
where
    R: FnMut() -> u8,
    B: FnMut() -> bool,
{
    fn rotation_code(&mut self) -> u8 {
        (self.rotation)()
    }

    fn button_pressed(&mut self) -> bool {
        (self.button)()
    }
}

/// Electrical level at which the button counts as pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonLevel {
    /// Pressed pulls the line low (pull-up wiring).
    #[default]
    ActiveLow,
    /// Pressed drives the line high (pull-down wiring).
    ActiveHigh,
}

/// Sampler reading the A/B contacts and the push button from GPIO inputs.
///
/// With the usual pull-up wiring both contacts are open (high) in a detent,
/// which yields [`DETENT_CODE`]. A failed pin read counts as low.
pub struct PinSampler<A, B, BTN> {
    pin_a: A,
    pin_b: B,
    button: BTN,
    level: ButtonLevel,
}

impl<A, B, BTN> PinSampler<A, B, BTN>
where
    A: InputPin,
    B: InputPin,
    BTN: InputPin,
{
    /// Create a sampler from the two contact pins and the button pin.
    pub fn new(pin_a: A, pin_b: B, button: BTN, level: ButtonLevel) -> Self {
        Self {
            pin_a,
            pin_b,
            button,
            level,
        }
    }

    /// Give the pins back.
    pub fn release(self) -> (A, B, BTN) {
        (self.pin_a, self.pin_b, self.button)
    }
}

impl<A, B, BTN> EncoderSampler for PinSampler<A, B, BTN>
where
    A: InputPin,
    B: InputPin,
    BTN: InputPin,
{
    fn rotation_code(&mut self) -> u8 {
        let a = self.pin_a.is_high().unwrap_or(false);
        let b = self.pin_b.is_high().unwrap_or(false);
        (u8::from(a) << 1) | u8::from(b)
    }

    fn button_pressed(&mut self) -> bool {
        let high = self.button.is_high().unwrap_or(false);
        match self.level {
            ButtonLevel::ActiveLow => !high,
            ButtonLevel::ActiveHigh => high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{Error, ErrorKind, ErrorType};

    struct FakePin(bool);

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    #[derive(Debug)]
    struct ReadFailed;

    impl Error for ReadFailed {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = ReadFailed;
    }

    impl InputPin for BrokenPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Err(ReadFailed)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Err(ReadFailed)
        }
    }

    #[test]
    fn both_contacts_open_is_detent() {
        let mut sampler =
            PinSampler::new(FakePin(true), FakePin(true), FakePin(true), ButtonLevel::ActiveLow);
        assert_eq!(sampler.rotation_code(), DETENT_CODE);
    }

    #[test]
    fn contact_a_is_high_bit() {
        let mut sampler =
            PinSampler::new(FakePin(true), FakePin(false), FakePin(true), ButtonLevel::ActiveLow);
        assert_eq!(sampler.rotation_code(), 0b10);

        let mut sampler =
            PinSampler::new(FakePin(false), FakePin(true), FakePin(true), ButtonLevel::ActiveLow);
        assert_eq!(sampler.rotation_code(), 0b01);
    }

    #[test]
    fn active_low_button() {
        let mut released =
            PinSampler::new(FakePin(true), FakePin(true), FakePin(true), ButtonLevel::ActiveLow);
        let mut pressed =
            PinSampler::new(FakePin(true), FakePin(true), FakePin(false), ButtonLevel::ActiveLow);
        assert!(!released.button_pressed());
        assert!(pressed.button_pressed());
    }

    #[test]
    fn active_high_button() {
        let mut pressed =
            PinSampler::new(FakePin(true), FakePin(true), FakePin(true), ButtonLevel::ActiveHigh);
        assert!(pressed.button_pressed());
    }

    #[test]
    fn failed_reads_count_as_low() {
        let mut sampler =
            PinSampler::new(BrokenPin, BrokenPin, BrokenPin, ButtonLevel::ActiveHigh);
        assert_eq!(sampler.rotation_code(), 0);
        assert!(!sampler.button_pressed());
    }

    #[test]
    fn release_returns_pins() {
        let sampler =
            PinSampler::new(FakePin(true), FakePin(false), FakePin(true), ButtonLevel::ActiveLow);
        let (a, b, button) = sampler.release();
        assert!(a.0);
        assert!(!b.0);
        assert!(button.0);
    }

    #[test]
    fn closures_are_sampled_each_call() {
        let mut codes = [1u8, 2].into_iter();
        let mut sampler = FnSampler::new(move || codes.next().unwrap_or(DETENT_CODE), || true);
        assert_eq!(sampler.rotation_code(), 1);
        assert_eq!(sampler.rotation_code(), 2);
        assert_eq!(sampler.rotation_code(), DETENT_CODE);
        assert!(sampler.button_pressed());
    }
}

//! Tick-driven driver combining the rotation and button machines.
//!
//! [`Encoder`] is owned by whatever runs at the tick rate (a timer
//! interrupt or a periodic task). The [`EncoderEvents`] register it writes
//! into is only borrowed, so the application can poll it from another
//! context at the same time.

use crate::button::{ButtonMachine, ButtonState};
use crate::config::EncoderConfig;
use crate::error::EncoderError;
use crate::events::{EncoderEvent, EncoderEvents};
use crate::rotation::{RotationMachine, RotationState};
use crate::sampler::EncoderSampler;

/// Polled rotary encoder with push button.
///
/// # Example
///
/// ```
/// use polled_encoder::{Encoder, EncoderConfig, EncoderEvents, FnSampler};
///
/// static EVENTS: EncoderEvents = EncoderEvents::new();
///
/// let sampler = FnSampler::new(|| 0b11, || false);
/// let mut encoder = Encoder::new(sampler, EncoderConfig::default(), &EVENTS).unwrap();
///
/// // Every tick, rotation first:
/// encoder.tick();
///
/// // Anywhere else:
/// if EVENTS.take_turn_right() {
///     // ...
/// }
/// ```
pub struct Encoder<'a, S> {
    sampler: S,
    config: EncoderConfig,
    events: &'a EncoderEvents,
    rotation: RotationMachine,
    button: ButtonMachine,
}

impl<'a, S> Encoder<'a, S>
where
    S: EncoderSampler,
{
    /// Create a driver and reset `events`.
    ///
    /// Tick counts are derived from `config` here and never change.
    ///
    /// # Errors
    /// * [`EncoderError::ZeroTickPeriod`] if the tick period is under 1 ms
    pub fn new(
        sampler: S,
        config: EncoderConfig,
        events: &'a EncoderEvents,
    ) -> Result<Self, EncoderError> {
        config.validate()?;

        let debounce_ticks = config.debounce_ticks();
        let hold_ticks = config.hold_ticks();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "encoder: debounce {} ticks, hold {} ticks",
            debounce_ticks,
            hold_ticks
        );

        events.clear();

        Ok(Self {
            sampler,
            config,
            events,
            rotation: RotationMachine::new(),
            button: ButtonMachine::new(debounce_ticks, hold_ticks),
        })
    }

    // -----------------------------------------------------------------------
    // Tick entry points
    // -----------------------------------------------------------------------

    /// Run one tick: rotation, then button.
    pub fn tick(&mut self) {
        self.process_rotation();
        self.process_button();
    }

    /// Rotation half of a tick. Must run before [`process_button()`](Self::process_button).
    ///
    /// A step taken with the button down is reported as a held-turn and
    /// suppresses the click or hold that press would otherwise produce.
    pub fn process_rotation(&mut self) {
        let code = self.sampler.rotation_code();
        let Some(direction) = self.rotation.update(code) else {
            return;
        };

        // Raw level, not the debounced state: a held-turn can begin
        // before the debounce window closes.
        let held = self.sampler.button_pressed();
        if held {
            self.button.suppress();
        }

        let event = direction.event(held);
        #[cfg(feature = "defmt")]
        defmt::debug!("encoder: {}", event);
        self.events.raise(event);
    }

    /// Button half of a tick.
    pub fn process_button(&mut self) {
        let pressed = self.sampler.button_pressed();
        if let Some(event) = self.button.update(pressed) {
            #[cfg(feature = "defmt")]
            defmt::debug!("encoder: {}", event);
            self.events.raise(event);
        }
    }

    // -----------------------------------------------------------------------
    // Event polling
    // -----------------------------------------------------------------------

    /// The register this driver reports into.
    pub fn events(&self) -> &'a EncoderEvents {
        self.events
    }

    pub fn take(&self, event: EncoderEvent) -> bool {
        self.events.take(event)
    }

    pub fn take_turn_right(&self) -> bool {
        self.events.take_turn_right()
    }

    pub fn take_turn_left(&self) -> bool {
        self.events.take_turn_left()
    }

    pub fn take_hold_turn_right(&self) -> bool {
        self.events.take_hold_turn_right()
    }

    pub fn take_hold_turn_left(&self) -> bool {
        self.events.take_hold_turn_left()
    }

    pub fn take_click(&self) -> bool {
        self.events.take_click()
    }

    pub fn take_hold(&self) -> bool {
        self.events.take_hold()
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn rotation_state(&self) -> RotationState {
        self.rotation.state()
    }

    pub fn button_state(&self) -> ButtonState {
        self.button.state()
    }

    /// Stop the driver and give the sampler back.
    pub fn release(self) -> S {
        self.sampler
    }
}

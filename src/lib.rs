//! Tick-driven driver for a quadrature rotary encoder with push button.
//!
//! Raw, noisy contact and button levels go in once per tick; six clean
//! events come out: turn right, turn left, held-turn right, held-turn left,
//! click and hold. No allocation, no threads, no blocking.
//!
//! # Architecture
//!
//! - **[`EncoderSampler`]**: reads the raw two-bit quadrature code and the
//!   raw button level. [`PinSampler`] covers plain GPIO wiring through
//!   `embedded-hal`; [`FnSampler`] wraps closures.
//! - **Rotation machine**: arms on the detent code (`0b11`) and reports one
//!   step per detent cycle, discarding bounce (`0b00`).
//! - **Button machine**: debounces for a fixed 50 ms, then tells clicks
//!   from holds. A rotation step taken while the button is down suppresses
//!   the click or hold of that press.
//! - **[`EncoderEvents`]**: sticky, lock-free event flags shared between
//!   the tick context and the application.
//! - **[`Encoder`]**: owns the sampler and both machines, exposes the tick
//!   entry points and the poll accessors.
//!
//! # Quick start
//!
//! ```no_run
//! use polled_encoder::{Encoder, EncoderConfig, EncoderEvents, FnSampler};
//! use embassy_time::Duration;
//!
//! static EVENTS: EncoderEvents = EncoderEvents::new();
//!
//! # fn read_contacts() -> u8 { 0b11 }
//! # fn read_button() -> bool { false }
//! let config = EncoderConfig::new(Duration::from_millis(10), Duration::from_millis(500));
//! let sampler = FnSampler::new(read_contacts, read_button);
//! let mut encoder = Encoder::new(sampler, config, &EVENTS).unwrap();
//!
//! // From the 10 ms timer:
//! encoder.tick();
//!
//! // From the main loop:
//! if EVENTS.take_click() {
//!     // ...
//! }
//! ```
//!
//! # Features
//!
//! - **`defmt`**: Enable [`defmt::Format`] implementations on public types
//!   and trace/debug logging of state transitions.

#![no_std]

pub use button::ButtonState;
pub use config::{EncoderConfig, DEBOUNCE_TIME, DEFAULT_HOLD_TIMEOUT, DEFAULT_TICK_PERIOD};
pub use encoder::Encoder;
pub use error::EncoderError;
pub use events::{EncoderEvent, EncoderEvents};
pub use rotation::{Direction, RotationState};
pub use sampler::{ButtonLevel, EncoderSampler, FnSampler, PinSampler, DETENT_CODE};

mod button;
mod config;
mod encoder;
mod error;
mod events;
mod rotation;
mod sampler;

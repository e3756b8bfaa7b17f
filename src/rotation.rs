//! Detent-to-detent rotation detection.
//!
//! The machine waits for the detent code, arms, and reports a single step
//! when the next non-detent code names a direction:
//!
//! ```text
//!                    code == 3
//!   AwaitingDetent ─────────────► Armed ──┐ code == 3
//!        ▲   ▲                      │  ◄──┘
//!        │   └──── code == 0 ───────┤       (bounce, no step)
//!        └──── code == 1 | 2 ───────┘       (one step)
//! ```
//!
//! Codes seen before the first detent are ignored, so powering up with
//! the knob between detents never produces a step.

use crate::events::EncoderEvent;
use crate::sampler::DETENT_CODE;

/// Quadrature code that marks contact bounce while armed.
const BOUNCE_CODE: u8 = 0b00;

/// Left shift turning a plain turn bit into its held-turn bit.
const HOLD_SHIFT: u8 = 2;

/// Rotation state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RotationState {
    /// Waiting to see the detent before trusting any transition.
    #[default]
    AwaitingDetent,
    /// Resting in a detent; the next direction code completes a step.
    Armed,
}

/// Direction of one completed detent step.
///
/// The discriminant is the quadrature code that completes the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Direction {
    Clockwise = 0b01,
    CounterClockwise = 0b10,
}

impl Direction {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            0b01 => Some(Direction::Clockwise),
            0b10 => Some(Direction::CounterClockwise),
            _ => None,
        }
    }

    /// Event reported for this step.
    ///
    /// The code itself is the turn event's bit, shifted by two when the
    /// button is held.
    pub fn event(self, held: bool) -> EncoderEvent {
        let bit = if held {
            (self as u8) << HOLD_SHIFT
        } else {
            self as u8
        };

        match bit {
            0x01 => EncoderEvent::TurnRight,
            0x02 => EncoderEvent::TurnLeft,
            0x04 => EncoderEvent::HoldTurnRight,
            _ => EncoderEvent::HoldTurnLeft,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct RotationMachine {
    state: RotationState,
}

impl RotationMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    /// Feed one raw code. Returns the direction when a step completes.
    pub fn update(&mut self, code: u8) -> Option<Direction> {
        let code = code & 0b11;

        match self.state {
            RotationState::AwaitingDetent => {
                if code == DETENT_CODE {
                    self.state = RotationState::Armed;
                }
                None
            }
            RotationState::Armed => match code {
                DETENT_CODE => None,
                BOUNCE_CODE => {
                    #[cfg(feature = "defmt")]
                    defmt::trace!("rotation: bounce, disarming");
                    self.state = RotationState::AwaitingDetent;
                    None
                }
                _ => {
                    self.state = RotationState::AwaitingDetent;
                    Direction::from_code(code)
                }
            },
        }
    }
}

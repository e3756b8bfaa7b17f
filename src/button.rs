//! Push-button debounce, click and hold detection.
//!
//! ```text
//!  AwaitingPress ──pressed──► Debouncing ──window ends, pressed──► AwaitingHoldOrRelease
//!       ▲  ▲                     │                                    │          │
//!       │  └── window ends, ─────┘                         released:  │          │ countdown
//!       │      released                                     Click     │          │ expires: Hold
//!       ├─────────────────────────────────────────────────────────────┘          ▼
//!       ├──────────────────── released ─────────────────────────────────── HoldActive
//!       └──────────────────── released ─────────────────────────────── SuppressedByRotation
//! ```
//!
//! `SuppressedByRotation` is entered from outside, when a rotation step is
//! reported while the button is down. It swallows the rest of that press so
//! one gesture yields either a click, a hold, or held-turns, never a mix.
//!
//! Within one tick the stages run in order (debounce, hold tracking,
//! release handling), so a stage can act on a state the previous stage
//! just entered. In particular the hold countdown starts on the same tick
//! the debounce window closes.

use crate::events::EncoderEvent;

/// Button state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Released and idle.
    #[default]
    AwaitingPress,
    /// A press was seen; waiting out the debounce window.
    Debouncing,
    /// Press confirmed; a release is a click, outlasting the countdown is a hold.
    AwaitingHoldOrRelease,
    /// Hold reported; waiting for release.
    HoldActive,
    /// A held-turn consumed this press; waiting for release.
    SuppressedByRotation,
}

#[derive(Debug)]
pub(crate) struct ButtonMachine {
    state: ButtonState,
    debounce_ticks: u32,
    debounce_counter: u32,
    hold_ticks: u32,
    hold_counter: u32,
}

impl ButtonMachine {
    /// Both tick counts must be at least 1.
    pub fn new(debounce_ticks: u32, hold_ticks: u32) -> Self {
        debug_assert!(debounce_ticks >= 1 && hold_ticks >= 1);
        Self {
            state: ButtonState::AwaitingPress,
            debounce_ticks,
            debounce_counter: debounce_ticks,
            hold_ticks,
            hold_counter: hold_ticks,
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Feed one raw button sample. Returns a click or hold when one completes.
    pub fn update(&mut self, pressed: bool) -> Option<EncoderEvent> {
        if self.state == ButtonState::AwaitingPress {
            if !pressed {
                return None;
            }
            self.state = ButtonState::Debouncing;
        }

        if self.state == ButtonState::Debouncing {
            self.debounce(pressed);
        }

        let event = if self.state == ButtonState::AwaitingHoldOrRelease {
            self.track_hold(pressed)
        } else {
            None
        };

        if !pressed
            && matches!(
                self.state,
                ButtonState::SuppressedByRotation | ButtonState::HoldActive
            )
        {
            self.state = ButtonState::AwaitingPress;
        }

        event
    }

    /// Swallow the rest of the current press.
    ///
    /// Both countdowns are re-armed so the next press gets its full
    /// debounce window and hold timeout.
    pub fn suppress(&mut self) {
        #[cfg(feature = "defmt")]
        if self.state != ButtonState::SuppressedByRotation {
            defmt::debug!("button: suppressed by rotation in {}", self.state);
        }

        self.debounce_counter = self.debounce_ticks;
        self.hold_counter = self.hold_ticks;
        self.state = ButtonState::SuppressedByRotation;
    }

    fn debounce(&mut self, pressed: bool) {
        self.debounce_counter = self.debounce_counter.saturating_sub(1);
        if self.debounce_counter != 0 {
            return;
        }

        self.debounce_counter = self.debounce_ticks;
        if pressed {
            self.state = ButtonState::AwaitingHoldOrRelease;
        } else {
            #[cfg(feature = "defmt")]
            defmt::trace!("button: bounce rejected");
            self.state = ButtonState::AwaitingPress;
        }
    }

    // Release is checked before the countdown, so a release on the
    // expiry tick is a click.
    fn track_hold(&mut self, pressed: bool) -> Option<EncoderEvent> {
        if !pressed {
            self.hold_counter = self.hold_ticks;
            self.state = ButtonState::AwaitingPress;
            return Some(EncoderEvent::Click);
        }

        self.hold_counter = self.hold_counter.saturating_sub(1);
        if self.hold_counter != 0 {
            return None;
        }

        self.hold_counter = self.hold_ticks;
        self.state = ButtonState::HoldActive;
        Some(EncoderEvent::Hold)
    }
}

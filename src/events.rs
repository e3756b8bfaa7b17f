//! Sticky event flags shared between the tick context and the application.
//!
//! The tick side raises flags, the application side consumes them. Each
//! flag only records *presence*: raising an already pending event is a
//! no-op, so two clicks between polls are reported as one.
//!
//! All six flags live in a single [`AtomicU8`]. Raising is a `fetch_or`
//! and consuming is a `fetch_and`, so a tick landing in the middle of a
//! poll can never lose an event. This needs atomic read-modify-write
//! support (any Cortex-M3 or newer, RISC-V with the A extension, host).

use core::sync::atomic::{AtomicU8, Ordering};

/// One kind of encoder event.
///
/// The discriminants are the bit positions inside the flag register. The
/// turn values double as the raw quadrature codes that produce them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum EncoderEvent {
    /// One detent clockwise with the button released.
    TurnRight = 0x01,
    /// One detent counter-clockwise with the button released.
    TurnLeft = 0x02,
    /// One detent clockwise while the button is held.
    HoldTurnRight = 0x04,
    /// One detent counter-clockwise while the button is held.
    HoldTurnLeft = 0x08,
    /// Button pressed and released before the hold timeout.
    Click = 0x10,
    /// Button kept pressed past the hold timeout.
    Hold = 0x20,
}

impl EncoderEvent {
    /// Every event, in bit order.
    pub const ALL: [EncoderEvent; 6] = [
        EncoderEvent::TurnRight,
        EncoderEvent::TurnLeft,
        EncoderEvent::HoldTurnRight,
        EncoderEvent::HoldTurnLeft,
        EncoderEvent::Click,
        EncoderEvent::Hold,
    ];

    /// Bit mask of this event inside the flag register.
    pub const fn bit(self) -> u8 {
        self as u8
    }
}

/// Register of sticky event flags.
///
/// `const`-constructible so it can sit in a `static` and be shared by an
/// interrupt handler and the main loop without a lock.
///
/// # Example
///
/// ```
/// use polled_encoder::{EncoderEvent, EncoderEvents};
///
/// static EVENTS: EncoderEvents = EncoderEvents::new();
///
/// EVENTS.raise(EncoderEvent::Click);
/// assert!(EVENTS.take_click());
/// assert!(!EVENTS.take_click());
/// ```
#[derive(Debug)]
pub struct EncoderEvents {
    flags: AtomicU8,
}

impl Default for EncoderEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl EncoderEvents {
    /// Create a register with every flag cleared.
    pub const fn new() -> Self {
        Self {
            flags: AtomicU8::new(0),
        }
    }

    // -----------------------------------------------------------------------
    // Producer side
    // -----------------------------------------------------------------------

    /// Mark `event` as pending. No effect if it already is.
    pub fn raise(&self, event: EncoderEvent) {
        self.flags.fetch_or(event.bit(), Ordering::AcqRel);
    }

    // -----------------------------------------------------------------------
    // Consumer side
    // -----------------------------------------------------------------------

    /// Consume `event`: clear its flag and report whether it was set.
    ///
    /// The test and the clear happen in one atomic operation.
    pub fn take(&self, event: EncoderEvent) -> bool {
        let bit = event.bit();
        self.flags.fetch_and(!bit, Ordering::AcqRel) & bit != 0
    }

    /// Consume the pending event with the lowest bit, if any.
    pub fn take_any(&self) -> Option<EncoderEvent> {
        EncoderEvent::ALL
            .iter()
            .copied()
            .find(|&event| self.take(event))
    }

    /// Whether `event` is pending, without consuming it.
    pub fn is_pending(&self, event: EncoderEvent) -> bool {
        self.flags.load(Ordering::Acquire) & event.bit() != 0
    }

    /// Drop every pending event.
    pub fn clear(&self) {
        self.flags.store(0, Ordering::Release);
    }

    pub fn take_turn_right(&self) -> bool {
        self.take(EncoderEvent::TurnRight)
    }

    pub fn take_turn_left(&self) -> bool {
        self.take(EncoderEvent::TurnLeft)
    }

    pub fn take_hold_turn_right(&self) -> bool {
        self.take(EncoderEvent::HoldTurnRight)
    }

    pub fn take_hold_turn_left(&self) -> bool {
        self.take(EncoderEvent::HoldTurnLeft)
    }

    pub fn take_click(&self) -> bool {
        self.take(EncoderEvent::Click)
    }

    pub fn take_hold(&self) -> bool {
        self.take(EncoderEvent::Hold)
    }
}

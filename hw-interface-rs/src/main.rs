//! polled-encoder-hw-interface
//!
//! Rotary encoder bring-up firmware for the Raspberry Pi Pico 2. Wires a
//! bare mechanical encoder with push button straight to GPIO and runs the
//! `polled-encoder` driver:
//!
//! 1. The tick task samples the contacts and the button every 10 ms and
//!    feeds them through `Encoder::tick()`.
//! 2. Completed gestures land as sticky flags in the shared
//!    `EncoderEvents` register.
//! 3. The main loop polls the six flags every 20 ms and logs whatever it
//!    finds, keeping a position counter for plain turns.
//!
//! # Wiring
//!
//! | Signal     | Pico 2 Pin | Notes                        |
//! |------------|------------|------------------------------|
//! | ENC A      | GP2        | Pull-up enabled              |
//! | ENC B      | GP3        | Pull-up enabled              |
//! | ENC SW     | GP4        | Active-low, pull-up enabled  |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Duration, Ticker, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use polled_encoder::{ButtonLevel, Encoder, EncoderConfig, EncoderEvent, EncoderEvents, PinSampler};

// ---------------------------------------------------------------------------
// Boot block
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Event flags, written by the tick task, consumed by the main loop.
static EVENTS: StaticCell<EncoderEvents> = StaticCell::new();

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

const TICK_PERIOD: Duration = Duration::from_millis(10);
const HOLD_TIMEOUT: Duration = Duration::from_millis(600);
const POLL_PERIOD: Duration = Duration::from_millis(20);

type KnobSampler = PinSampler<Input<'static>, Input<'static>, Input<'static>>;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Fixed-rate sampling task.
///
/// Ticker keeps the period steady even if a tick runs late, so the
/// debounce and hold tick counts stay true to wall time.
#[embassy_executor::task]
async fn tick_task(mut encoder: Encoder<'static, KnobSampler>) {
    info!("Encoder tick task started ({} ms)", encoder.config().tick_period.as_millis());

    let mut ticker = Ticker::every(encoder.config().tick_period);
    loop {
        encoder.tick();
        ticker.next().await;
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("polled-encoder-hw-interface starting");

    // Contacts are open (high) in a detent, which reads as code 0b11.
    let pin_a = Input::new(p.PIN_2, Pull::Up);
    let pin_b = Input::new(p.PIN_3, Pull::Up);
    let button = Input::new(p.PIN_4, Pull::Up);
    let sampler = PinSampler::new(pin_a, pin_b, button, ButtonLevel::ActiveLow);

    let events: &'static EncoderEvents = EVENTS.init(EncoderEvents::new());
    let config = EncoderConfig::new(TICK_PERIOD, HOLD_TIMEOUT);

    let encoder = match Encoder::new(sampler, config, events) {
        Ok(encoder) => encoder,
        Err(e) => {
            error!("Encoder setup failed: {}", e);
            return;
        }
    };

    spawner.spawn(unwrap!(tick_task(encoder)));
    info!("Encoder ready, turn or press the knob");

    // Consumer loop: drain every pending flag once per poll.
    let mut position: i32 = 0;
    loop {
        Timer::after(POLL_PERIOD).await;

        while let Some(event) = events.take_any() {
            match event {
                EncoderEvent::TurnRight => {
                    position += 1;
                    info!("Turn right, position={}", position);
                }
                EncoderEvent::TurnLeft => {
                    position -= 1;
                    info!("Turn left, position={}", position);
                }
                EncoderEvent::HoldTurnRight | EncoderEvent::HoldTurnLeft => {
                    info!("Held turn: {}", event);
                }
                EncoderEvent::Click => info!("Click"),
                EncoderEvent::Hold => {
                    position = 0;
                    info!("Hold, position reset");
                }
            }
        }
    }
}

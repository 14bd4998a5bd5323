//! Time-of-day greetings and message composition.

use chrono::{Local, Timelike};

use crate::error::{FortuneError, FortuneResult};

/// The greeting for an hour of the day (0-23).
pub fn greeting_for_hour(hour: u32) -> FortuneResult<&'static str> {
    match hour {
        0..=11 => Ok("Good morning"),
        12..=17 => Ok("Good afternoon"),
        18..=23 => Ok("Good evening"),
        _ => Err(FortuneError::HourOutOfRange(hour)),
    }
}

/// Join a greeting and a fortune into the message the character speaks.
pub fn compose_message(greeting: &str, text: &str) -> String {
    format!("{greeting}! {text}")
}

/// The current hour on the local wall clock.
pub fn current_hour() -> u32 {
    Local::now().hour()
}

//! Blocking waits on `embassy_time` durations

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

/// Sleep for `duration` on a blocking delay
///
/// Durations that do not fit in `u32` microseconds are slept in millisecond
/// chunks.
pub fn delay_for<D: DelayNs + ?Sized>(delay: &mut D, duration: Duration) {
    if let Ok(us) = u32::try_from(duration.as_micros()) {
        delay.delay_us(us);
        return;
    }

    let mut remaining = duration.as_millis();
    while remaining > 0 {
        let chunk = u32::try_from(remaining).unwrap_or(u32::MAX);
        delay.delay_ms(chunk);
        remaining -= u64::from(chunk);
    }
}

/// Minutes in a day, the modulus for wall-clock arithmetic.
const MINUTES_PER_DAY: i32 = 24 * 60;

/// Computes the wall-clock time a reminder fires for an event start time.
///
/// Subtracts `lead_minutes` from the start time, borrowing from the hour when the
/// minute goes negative and wrapping to the previous day when the hour goes
/// negative. Total over every `(hour, minute)` pair; the result is always a
/// normalized `(0..=23, 0..=59)` time of day.
///
/// # Arguments
/// - `start_hour` - Hour the event starts at (0-23)
/// - `start_minute` - Minute the event starts at (0-59)
/// - `lead_minutes` - How long before the start the reminder fires
///
/// # Returns
/// - `(hour, minute)` - Time of day the reminder fires
pub fn compute_trigger_time(start_hour: u8, start_minute: u8, lead_minutes: u8) -> (u8, u8) {
    let start = i32::from(start_hour) * 60 + i32::from(start_minute);
    let trigger = (start - i32::from(lead_minutes)).rem_euclid(MINUTES_PER_DAY);

    ((trigger / 60) as u8, (trigger % 60) as u8)
}

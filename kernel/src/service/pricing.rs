use chrono::NaiveDateTime;
use shared::error::{AppError, AppResult};

/// Prices a booking as `hourly_rate * duration_in_hours`. The duration must
/// be strictly positive; no rounding is applied beyond f64 arithmetic.
pub fn quote(hourly_rate: f64, starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> AppResult<f64> {
    let minutes = (ends_at - starts_at).num_minutes();
    if minutes <= 0 {
        return Err(AppError::InvalidDuration(
            "the reservation must be longer than 0 minutes".into(),
        ));
    }
    Ok(hourly_rate * minutes as f64 / 60.0)
}

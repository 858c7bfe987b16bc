use chrono::NaiveTime;
use kernel::model::{
    id::CourtId,
    schedule::{ScheduleConfig, WeekdaySet},
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct ScheduleConfigRow {
    pub court_id: CourtId,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub slot_duration_minutes: i32,
    pub available_weekdays: i16,
    pub min_advance_hours: i32,
    pub max_advance_days: i32,
}

impl TryFrom<ScheduleConfigRow> for ScheduleConfig {
    type Error = AppError;

    fn try_from(value: ScheduleConfigRow) -> Result<Self, Self::Error> {
        let ScheduleConfigRow {
            court_id,
            open_time,
            close_time,
            slot_duration_minutes,
            available_weekdays,
            min_advance_hours,
            max_advance_days,
        } = value;
        let available_weekdays = WeekdaySet::from_bits(available_weekdays).ok_or_else(|| {
            AppError::ConversionEntityError(format!(
                "invalid weekday bitmask stored for court {court_id}: {available_weekdays}"
            ))
        })?;
        Ok(ScheduleConfig {
            court_id,
            open_time,
            close_time,
            slot_duration_minutes,
            available_weekdays,
            min_advance_hours,
            max_advance_days,
        })
    }
}

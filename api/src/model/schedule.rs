use chrono::NaiveTime;
use garde::Validate;
use kernel::model::{
    id::CourtId,
    schedule::{ScheduleConfig, WeekdaySet},
};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertScheduleConfigRequest {
    #[garde(skip)]
    pub open_time: NaiveTime,
    #[garde(skip)]
    pub close_time: NaiveTime,
    #[garde(range(min = 30, max = 240))]
    pub slot_duration_minutes: i32,
    /// ISO weekday numbers, 1=Monday .. 7=Sunday.
    #[garde(length(min = 1, max = 7))]
    pub available_weekdays: Vec<u8>,
    #[garde(range(min = 0))]
    pub min_advance_hours: i32,
    #[garde(range(min = 1, max = 365))]
    pub max_advance_days: i32,
}

impl UpsertScheduleConfigRequest {
    pub fn into_config(self, court_id: CourtId) -> Result<ScheduleConfig, AppError> {
        let UpsertScheduleConfigRequest {
            open_time,
            close_time,
            slot_duration_minutes,
            available_weekdays,
            min_advance_hours,
            max_advance_days,
        } = self;
        let available_weekdays =
            WeekdaySet::from_numbers(&available_weekdays).ok_or_else(|| {
                AppError::UnprocessableEntity(
                    "available weekdays must be numbers between 1 (Monday) and 7 (Sunday)".into(),
                )
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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfigResponse {
    pub court_id: CourtId,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub slot_duration_minutes: i32,
    pub available_weekdays: Vec<u8>,
    pub min_advance_hours: i32,
    pub max_advance_days: i32,
}

impl From<ScheduleConfig> for ScheduleConfigResponse {
    fn from(value: ScheduleConfig) -> Self {
        let ScheduleConfig {
            court_id,
            open_time,
            close_time,
            slot_duration_minutes,
            available_weekdays,
            min_advance_hours,
            max_advance_days,
        } = value;
        Self {
            court_id,
            open_time,
            close_time,
            slot_duration_minutes,
            available_weekdays: available_weekdays.numbers(),
            min_advance_hours,
            max_advance_days,
        }
    }
}

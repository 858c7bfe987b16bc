use chrono::{NaiveDate, NaiveDateTime};
use kernel::model::{id::CourtId, schedule::Slot};
use kernel::service::booking::RangeDecision;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeSlotsQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotResponse {
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
}

impl From<Slot> for SlotResponse {
    fn from(value: Slot) -> Self {
        Self {
            starts_at: value.starts_at,
            ends_at: value.ends_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeSlotsResponse {
    pub court_id: CourtId,
    pub date: NaiveDate,
    pub items: Vec<SlotResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQuery {
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeCheckResponse {
    pub valid: bool,
    pub reason: Option<String>,
}

impl From<RangeDecision> for RangeCheckResponse {
    fn from(value: RangeDecision) -> Self {
        Self {
            valid: value.valid,
            reason: value.reason,
        }
    }
}

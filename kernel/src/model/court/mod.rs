use crate::model::id::CourtId;

pub mod event;

#[derive(Debug, Clone)]
pub struct Court {
    pub id: CourtId,
    pub name: String,
    pub hourly_rate: f64,
    pub is_active: bool,
}

use kernel::model::{court::Court, id::CourtId};

#[derive(sqlx::FromRow)]
pub struct CourtRow {
    pub court_id: CourtId,
    pub name: String,
    pub hourly_rate: f64,
    pub is_active: bool,
}

impl From<CourtRow> for Court {
    fn from(value: CourtRow) -> Self {
        let CourtRow {
            court_id,
            name,
            hourly_rate,
            is_active,
        } = value;
        Court {
            id: court_id,
            name,
            hourly_rate,
            is_active,
        }
    }
}

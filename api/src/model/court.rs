use garde::Validate;
use kernel::model::{
    court::{event::CreateCourt, Court},
    id::CourtId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourtRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(range(min = 0.0))]
    pub hourly_rate: f64,
    #[garde(skip)]
    pub is_active: bool,
}

impl From<CreateCourtRequest> for CreateCourt {
    fn from(value: CreateCourtRequest) -> Self {
        let CreateCourtRequest {
            name,
            hourly_rate,
            is_active,
        } = value;
        CreateCourt {
            name,
            hourly_rate,
            is_active,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtCreatedResponse {
    pub id: CourtId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtResponse {
    pub id: CourtId,
    pub name: String,
    pub hourly_rate: f64,
    pub is_active: bool,
}

impl From<Court> for CourtResponse {
    fn from(value: Court) -> Self {
        let Court {
            id,
            name,
            hourly_rate,
            is_active,
        } = value;
        Self {
            id,
            name,
            hourly_rate,
            is_active,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtsResponse {
    pub items: Vec<CourtResponse>,
}

impl From<Vec<Court>> for CourtsResponse {
    fn from(value: Vec<Court>) -> Self {
        Self {
            items: value.into_iter().map(CourtResponse::from).collect(),
        }
    }
}

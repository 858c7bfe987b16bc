use chrono::NaiveDateTime;
use serde::Serialize;
use shared::error::AppError;

use crate::model::id::{CourtId, ReservationId, UserId};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    /// Live reservations are the ones that block the slot.
    pub fn is_live(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// The reservation state machine:
    /// PENDING -> CONFIRMED | CANCELLED, CONFIRMED -> CANCELLED | COMPLETED.
    /// CANCELLED and COMPLETED are terminal.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed)
                | (Self::Pending, Self::Cancelled)
                | (Self::Confirmed, Self::Cancelled)
                | (Self::Confirmed, Self::Completed)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReservationStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CANCELLED" => Ok(Self::Cancelled),
            "COMPLETED" => Ok(Self::Completed),
            other => Err(AppError::ConversionEntityError(format!(
                "unknown reservation status: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Failed => "FAILED",
            Self::Refunded => "REFUNDED",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "PAID" => Ok(Self::Paid),
            "FAILED" => Ok(Self::Failed),
            "REFUNDED" => Ok(Self::Refunded),
            other => Err(AppError::ConversionEntityError(format!(
                "unknown payment status: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: ReservationId,
    pub court_id: CourtId,
    pub requester_id: UserId,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub amount: f64,
    pub status: ReservationStatus,
    pub payment_status: PaymentStatus,
    pub payment_ref: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Reservation {
    /// Half-open interval overlap against `[starts_at, ends_at)`. Only live
    /// reservations block; cancelled and completed ones are history.
    pub fn overlaps(&self, starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> bool {
        self.status.is_live() && self.starts_at < ends_at && self.ends_at > starts_at
    }
}

/// Pure conflict check over a caller-supplied candidate set. The caller is
/// expected to pre-filter the candidates to a single court and a range near
/// the one being probed.
pub fn has_conflict(
    existing: &[Reservation],
    starts_at: NaiveDateTime,
    ends_at: NaiveDateTime,
) -> bool {
    existing.iter().any(|r| r.overlaps(starts_at, ends_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    fn reservation(
        starts: NaiveDateTime,
        ends: NaiveDateTime,
        status: ReservationStatus,
    ) -> Reservation {
        Reservation {
            id: ReservationId::new(),
            court_id: CourtId::new(),
            requester_id: UserId::new(),
            starts_at: starts,
            ends_at: ends,
            amount: 1000.0,
            status,
            payment_status: PaymentStatus::Pending,
            payment_ref: None,
            created_at: at(8, 0),
        }
    }

    #[test]
    fn overlapping_live_reservations_conflict() {
        let existing = vec![reservation(at(14, 0), at(16, 0), ReservationStatus::Confirmed)];
        assert!(has_conflict(&existing, at(15, 0), at(17, 0)));
        assert!(has_conflict(&existing, at(13, 0), at(15, 0)));
        assert!(has_conflict(&existing, at(14, 30), at(15, 30)));
    }

    #[test]
    fn touching_ranges_do_not_conflict() {
        let existing = vec![reservation(at(14, 0), at(16, 0), ReservationStatus::Pending)];
        assert!(!has_conflict(&existing, at(16, 0), at(17, 0)));
        assert!(!has_conflict(&existing, at(13, 0), at(14, 0)));
    }

    #[test]
    fn cancelled_and_completed_reservations_do_not_block() {
        let existing = vec![
            reservation(at(14, 0), at(16, 0), ReservationStatus::Cancelled),
            reservation(at(14, 0), at(16, 0), ReservationStatus::Completed),
        ];
        assert!(!has_conflict(&existing, at(15, 0), at(17, 0)));
    }

    #[test]
    fn state_machine_allows_only_the_documented_transitions() {
        use ReservationStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Completed));

        assert!(!Pending.can_transition_to(Completed));
        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Confirmed));
        assert!(!Cancelled.can_transition_to(Cancelled));
        assert!(!Completed.can_transition_to(Cancelled));
    }

    #[test]
    fn statuses_round_trip_through_strings() {
        for status in [
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            ReservationStatus::Cancelled,
            ReservationStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<ReservationStatus>().unwrap(), status);
        }
        assert!("UNKNOWN".parse::<ReservationStatus>().is_err());
        assert!("UNKNOWN".parse::<PaymentStatus>().is_err());
    }
}

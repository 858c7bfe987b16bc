use async_trait::async_trait;
use kernel::{model::reservation::Reservation, notifier::ReservationNotifier};

/// Default notifier: emits structured log events for downstream consumers.
/// Stands in for the mail/payment callbacks the production deployment wires
/// up here.
#[derive(Debug, Default)]
pub struct TracingNotifier;

#[async_trait]
impl ReservationNotifier for TracingNotifier {
    async fn reservation_confirmed(&self, reservation: &Reservation) {
        tracing::info!(
            reservation_id = %reservation.id,
            court_id = %reservation.court_id,
            starts_at = %reservation.starts_at,
            ends_at = %reservation.ends_at,
            amount = reservation.amount,
            "reservation confirmed"
        );
    }

    async fn reservation_cancelled(&self, reservation: &Reservation) {
        tracing::info!(
            reservation_id = %reservation.id,
            court_id = %reservation.court_id,
            starts_at = %reservation.starts_at,
            ends_at = %reservation.ends_at,
            "reservation cancelled"
        );
    }
}

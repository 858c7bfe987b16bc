use async_trait::async_trait;

use crate::model::reservation::Reservation;

/// Outbound hook fired after a reservation changes state. The payment and
/// notification collaborators subscribe behind this trait; failures on their
/// side must not roll back the transition, so the methods are infallible
/// from the engine's point of view.
#[async_trait]
pub trait ReservationNotifier: Send + Sync {
    async fn reservation_confirmed(&self, reservation: &Reservation);
    async fn reservation_cancelled(&self, reservation: &Reservation);
}

/// Notifier that drops every event. Useful for tests and for deployments
/// without downstream subscribers.
#[derive(Debug, Default)]
pub struct NoopNotifier;

#[async_trait]
impl ReservationNotifier for NoopNotifier {
    async fn reservation_confirmed(&self, _reservation: &Reservation) {}
    async fn reservation_cancelled(&self, _reservation: &Reservation) {}
}

use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};
use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::{
    model::{
        id::{CourtId, ReservationId, UserId},
        reservation::{
            event::{CreateReservation, TransitionReservation},
            has_conflict, PaymentStatus, Reservation, ReservationStatus,
        },
        schedule::Slot,
    },
    notifier::ReservationNotifier,
    repository::{
        court::CourtRepository, reservation::ReservationRepository,
        schedule::ScheduleConfigRepository,
    },
    service::pricing,
};

/// Outcome of a standalone range probe, with the failing rule (if any) kept
/// for the caller's diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeDecision {
    pub valid: bool,
    pub reason: Option<String>,
}

/// Orchestrates schedule validation, conflict detection, pricing and the
/// reservation state machine. The admission race is settled by the
/// reservation store, which re-checks conflicts and inserts atomically per
/// court; the pre-check here only produces friendlier early failures.
#[derive(new)]
pub struct BookingService {
    court_repository: Arc<dyn CourtRepository>,
    schedule_config_repository: Arc<dyn ScheduleConfigRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    notifier: Arc<dyn ReservationNotifier>,
}

impl BookingService {
    pub async fn create(
        &self,
        court_id: CourtId,
        requester_id: UserId,
        starts_at: NaiveDateTime,
        ends_at: NaiveDateTime,
    ) -> AppResult<Reservation> {
        let court = self
            .court_repository
            .find_by_id(court_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("court {court_id} not found")))?;
        if !court.is_active {
            return Err(AppError::UnprocessableEntity(format!(
                "court {court_id} is not currently accepting reservations"
            )));
        }

        let config = self
            .schedule_config_repository
            .get_or_create_default(court_id)
            .await?;
        let now = Local::now().naive_local();
        config
            .check_range(starts_at, ends_at, now)
            .map_err(|violation| AppError::InvalidRange(violation.to_string()))?;

        let live = self
            .reservation_repository
            .find_live_in_range(court_id, starts_at, ends_at)
            .await?;
        if has_conflict(&live, starts_at, ends_at) {
            return Err(AppError::SlotConflict(format!(
                "court {court_id} already has a reservation in the requested range"
            )));
        }

        let amount = pricing::quote(court.hourly_rate, starts_at, ends_at)?;

        let event = CreateReservation::new(court_id, requester_id, starts_at, ends_at, amount);
        let reservation_id = self.reservation_repository.create(event).await?;
        self.reload(reservation_id).await
    }

    /// Marks a pending reservation as confirmed and paid. Invoked by the
    /// payment collaborator's success callback; the external payment
    /// reference, when present, is recorded on the reservation.
    pub async fn confirm(
        &self,
        reservation_id: ReservationId,
        payment_ref: Option<String>,
    ) -> AppResult<Reservation> {
        let reservation = self.reload(reservation_id).await?;
        self.ensure_transition(&reservation, ReservationStatus::Confirmed)?;

        self.reservation_repository
            .transition(TransitionReservation::new(
                reservation_id,
                reservation.status,
                ReservationStatus::Confirmed,
                Some(PaymentStatus::Paid),
                payment_ref,
            ))
            .await?;

        let confirmed = self.reload(reservation_id).await?;
        self.notifier.reservation_confirmed(&confirmed).await;
        Ok(confirmed)
    }

    /// Cancels a pending or confirmed reservation on behalf of its
    /// requester. The payment status is left untouched; refunds are the
    /// payment collaborator's concern.
    pub async fn cancel(
        &self,
        reservation_id: ReservationId,
        actor_id: UserId,
    ) -> AppResult<Reservation> {
        let reservation = self.reload(reservation_id).await?;
        if reservation.requester_id != actor_id {
            return Err(AppError::ForbiddenOperation);
        }
        self.ensure_transition(&reservation, ReservationStatus::Cancelled)?;

        self.reservation_repository
            .transition(TransitionReservation::new(
                reservation_id,
                reservation.status,
                ReservationStatus::Cancelled,
                None,
                None,
            ))
            .await?;

        let cancelled = self.reload(reservation_id).await?;
        self.notifier.reservation_cancelled(&cancelled).await;
        Ok(cancelled)
    }

    /// Administrative transition after the booked time has elapsed. The
    /// engine only enforces the guard; scheduling the call is the job of an
    /// external cron collaborator.
    pub async fn complete(&self, reservation_id: ReservationId) -> AppResult<Reservation> {
        let reservation = self.reload(reservation_id).await?;
        self.ensure_transition(&reservation, ReservationStatus::Completed)?;

        self.reservation_repository
            .transition(TransitionReservation::new(
                reservation_id,
                reservation.status,
                ReservationStatus::Completed,
                None,
                None,
            ))
            .await?;

        self.reload(reservation_id).await
    }

    /// The slots on `date` that no live reservation overlaps.
    pub async fn free_slots(&self, court_id: CourtId, date: NaiveDate) -> AppResult<Vec<Slot>> {
        self.ensure_court_exists(court_id).await?;
        let config = self
            .schedule_config_repository
            .get_or_create_default(court_id)
            .await?;
        let live = self
            .reservation_repository
            .find_live_in_range(
                court_id,
                date.and_time(config.open_time),
                date.and_time(config.close_time),
            )
            .await?;
        Ok(config
            .slots_on(date)
            .filter(|slot| !has_conflict(&live, slot.starts_at, slot.ends_at))
            .collect())
    }

    /// Probes a range against the court's operating rules without touching
    /// the reservation set.
    pub async fn is_range_valid(
        &self,
        court_id: CourtId,
        starts_at: NaiveDateTime,
        ends_at: NaiveDateTime,
    ) -> AppResult<RangeDecision> {
        self.ensure_court_exists(court_id).await?;
        let config = self
            .schedule_config_repository
            .get_or_create_default(court_id)
            .await?;
        let now = Local::now().naive_local();
        Ok(match config.check_range(starts_at, ends_at, now) {
            Ok(()) => RangeDecision {
                valid: true,
                reason: None,
            },
            Err(violation) => RangeDecision {
                valid: false,
                reason: Some(violation.to_string()),
            },
        })
    }

    async fn ensure_court_exists(&self, court_id: CourtId) -> AppResult<()> {
        self.court_repository
            .find_by_id(court_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::EntityNotFound(format!("court {court_id} not found")))
    }

    async fn reload(&self, reservation_id: ReservationId) -> AppResult<Reservation> {
        self.reservation_repository
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("reservation {reservation_id} not found"))
            })
    }

    fn ensure_transition(
        &self,
        reservation: &Reservation,
        next: ReservationStatus,
    ) -> AppResult<()> {
        if !reservation.status.can_transition_to(next) {
            return Err(AppError::InvalidState(format!(
                "reservation {} cannot go from {} to {}",
                reservation.id, reservation.status, next
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::court::{event::CreateCourt, Court};
    use crate::model::schedule::ScheduleConfig;
    use crate::notifier::NoopNotifier;
    use async_trait::async_trait;
    use chrono::{Duration, NaiveTime};
    use mockall::mock;
    use mockall::predicate::eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    mock! {
        pub CourtRepo {}

        #[async_trait]
        impl CourtRepository for CourtRepo {
            async fn create(&self, event: CreateCourt) -> AppResult<CourtId>;
            async fn find_by_id(&self, court_id: CourtId) -> AppResult<Option<Court>>;
            async fn find_all(&self) -> AppResult<Vec<Court>>;
        }
    }

    mock! {
        pub ScheduleRepo {}

        #[async_trait]
        impl ScheduleConfigRepository for ScheduleRepo {
            async fn find_by_court_id(&self, court_id: CourtId) -> AppResult<Option<ScheduleConfig>>;
            async fn upsert(&self, config: &ScheduleConfig) -> AppResult<()>;
            async fn get_or_create_default(&self, court_id: CourtId) -> AppResult<ScheduleConfig>;
        }
    }

    mock! {
        pub ReservationRepo {}

        #[async_trait]
        impl ReservationRepository for ReservationRepo {
            async fn create(&self, event: CreateReservation) -> AppResult<ReservationId>;
            async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
            async fn find_live_in_range(
                &self,
                court_id: CourtId,
                from: NaiveDateTime,
                until: NaiveDateTime,
            ) -> AppResult<Vec<Reservation>>;
            async fn find_by_requester(&self, requester_id: UserId) -> AppResult<Vec<Reservation>>;
            async fn transition(&self, event: TransitionReservation) -> AppResult<()>;
        }
    }

    struct CountingNotifier {
        confirmed: AtomicUsize,
        cancelled: AtomicUsize,
    }

    impl CountingNotifier {
        fn new() -> Self {
            Self {
                confirmed: AtomicUsize::new(0),
                cancelled: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ReservationNotifier for CountingNotifier {
        async fn reservation_confirmed(&self, _reservation: &Reservation) {
            self.confirmed.fetch_add(1, Ordering::SeqCst);
        }
        async fn reservation_cancelled(&self, _reservation: &Reservation) {
            self.cancelled.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn court(id: CourtId, hourly_rate: f64, is_active: bool) -> Court {
        Court {
            id,
            name: "Center Court".into(),
            hourly_rate,
            is_active,
        }
    }

    // Booking times are placed on the day after "now" so the default
    // one-hour minimum advance always passes.
    fn tomorrow_at(h: u32, m: u32) -> NaiveDateTime {
        (Local::now().date_naive() + Duration::days(1))
            .and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    fn reservation(
        id: ReservationId,
        court_id: CourtId,
        requester_id: UserId,
        starts_at: NaiveDateTime,
        ends_at: NaiveDateTime,
        status: ReservationStatus,
    ) -> Reservation {
        Reservation {
            id,
            court_id,
            requester_id,
            starts_at,
            ends_at,
            amount: 2000.0,
            status,
            payment_status: PaymentStatus::Pending,
            payment_ref: None,
            created_at: Local::now().naive_local(),
        }
    }

    fn service(
        courts: MockCourtRepo,
        schedules: MockScheduleRepo,
        reservations: MockReservationRepo,
    ) -> BookingService {
        BookingService::new(
            Arc::new(courts),
            Arc::new(schedules),
            Arc::new(reservations),
            Arc::new(NoopNotifier),
        )
    }

    #[tokio::test]
    async fn create_prices_and_persists_a_pending_reservation() {
        let court_id = CourtId::new();
        let requester_id = UserId::new();
        let reservation_id = ReservationId::new();
        let starts_at = tomorrow_at(14, 0);
        let ends_at = tomorrow_at(16, 0);

        let mut courts = MockCourtRepo::new();
        courts
            .expect_find_by_id()
            .with(eq(court_id))
            .returning(move |id| Ok(Some(court(id, 1000.0, true))));

        let mut schedules = MockScheduleRepo::new();
        schedules
            .expect_get_or_create_default()
            .with(eq(court_id))
            .returning(|id| Ok(ScheduleConfig::default_for(id)));

        let mut reservations = MockReservationRepo::new();
        reservations
            .expect_find_live_in_range()
            .returning(|_, _, _| Ok(vec![]));
        reservations
            .expect_create()
            .withf(move |event| {
                event.court_id == court_id && (event.amount - 2000.0).abs() < f64::EPSILON
            })
            .returning(move |_| Ok(reservation_id));
        reservations
            .expect_find_by_id()
            .with(eq(reservation_id))
            .returning(move |id| {
                Ok(Some(reservation(
                    id,
                    court_id,
                    requester_id,
                    starts_at,
                    ends_at,
                    ReservationStatus::Pending,
                )))
            });

        let service = service(courts, schedules, reservations);
        let created = service
            .create(court_id, requester_id, starts_at, ends_at)
            .await
            .unwrap();
        assert_eq!(created.id, reservation_id);
        assert_eq!(created.status, ReservationStatus::Pending);
    }

    #[tokio::test]
    async fn create_rejects_an_unknown_court() {
        let mut courts = MockCourtRepo::new();
        courts.expect_find_by_id().returning(|_| Ok(None));

        let service = service(courts, MockScheduleRepo::new(), MockReservationRepo::new());
        let err = service
            .create(
                CourtId::new(),
                UserId::new(),
                tomorrow_at(14, 0),
                tomorrow_at(15, 0),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
    }

    #[tokio::test]
    async fn create_rejects_an_inactive_court() {
        let mut courts = MockCourtRepo::new();
        courts
            .expect_find_by_id()
            .returning(|id| Ok(Some(court(id, 1000.0, false))));

        let service = service(courts, MockScheduleRepo::new(), MockReservationRepo::new());
        let err = service
            .create(
                CourtId::new(),
                UserId::new(),
                tomorrow_at(14, 0),
                tomorrow_at(15, 0),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test]
    async fn create_rejects_a_range_outside_opening_hours() {
        let mut courts = MockCourtRepo::new();
        courts
            .expect_find_by_id()
            .returning(|id| Ok(Some(court(id, 1000.0, true))));
        let mut schedules = MockScheduleRepo::new();
        schedules
            .expect_get_or_create_default()
            .returning(|id| Ok(ScheduleConfig::default_for(id)));

        // The conflict check must not run when validation already failed.
        let service = service(courts, schedules, MockReservationRepo::new());
        let err = service
            .create(
                CourtId::new(),
                UserId::new(),
                tomorrow_at(7, 0),
                tomorrow_at(8, 0),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRange(_)));
    }

    #[tokio::test]
    async fn create_rejects_overlap_with_a_live_reservation() {
        let court_id = CourtId::new();
        let booked_start = tomorrow_at(14, 0);
        let booked_end = tomorrow_at(16, 0);

        let mut courts = MockCourtRepo::new();
        courts
            .expect_find_by_id()
            .returning(|id| Ok(Some(court(id, 1000.0, true))));
        let mut schedules = MockScheduleRepo::new();
        schedules
            .expect_get_or_create_default()
            .returning(|id| Ok(ScheduleConfig::default_for(id)));
        let mut reservations = MockReservationRepo::new();
        reservations
            .expect_find_live_in_range()
            .returning(move |cid, _, _| {
                Ok(vec![reservation(
                    ReservationId::new(),
                    cid,
                    UserId::new(),
                    booked_start,
                    booked_end,
                    ReservationStatus::Confirmed,
                )])
            });

        let service = service(courts, schedules, reservations);
        let err = service
            .create(
                court_id,
                UserId::new(),
                tomorrow_at(15, 0),
                tomorrow_at(17, 0),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::SlotConflict(_)));
    }

    #[tokio::test]
    async fn create_accepts_a_range_adjacent_to_a_live_reservation() {
        let court_id = CourtId::new();
        let requester_id = UserId::new();
        let new_id = ReservationId::new();
        let booked_start = tomorrow_at(14, 0);
        let booked_end = tomorrow_at(16, 0);
        let starts_at = tomorrow_at(16, 0);
        let ends_at = tomorrow_at(17, 0);

        let mut courts = MockCourtRepo::new();
        courts
            .expect_find_by_id()
            .returning(|id| Ok(Some(court(id, 1000.0, true))));
        let mut schedules = MockScheduleRepo::new();
        schedules
            .expect_get_or_create_default()
            .returning(|id| Ok(ScheduleConfig::default_for(id)));
        let mut reservations = MockReservationRepo::new();
        reservations
            .expect_find_live_in_range()
            .returning(move |cid, _, _| {
                Ok(vec![reservation(
                    ReservationId::new(),
                    cid,
                    UserId::new(),
                    booked_start,
                    booked_end,
                    ReservationStatus::Confirmed,
                )])
            });
        reservations.expect_create().returning(move |_| Ok(new_id));
        reservations.expect_find_by_id().returning(move |id| {
            Ok(Some(reservation(
                id,
                court_id,
                requester_id,
                starts_at,
                ends_at,
                ReservationStatus::Pending,
            )))
        });

        let service = service(courts, schedules, reservations);
        let created = service
            .create(court_id, requester_id, starts_at, ends_at)
            .await
            .unwrap();
        assert_eq!(created.id, new_id);
    }

    #[tokio::test]
    async fn confirm_moves_pending_to_confirmed_and_notifies() {
        let court_id = CourtId::new();
        let requester_id = UserId::new();
        let reservation_id = ReservationId::new();
        let starts_at = tomorrow_at(14, 0);
        let ends_at = tomorrow_at(15, 0);

        let mut reservations = MockReservationRepo::new();
        let mut current = ReservationStatus::Pending;
        reservations
            .expect_find_by_id()
            .returning(move |id| {
                let res = reservation(id, court_id, requester_id, starts_at, ends_at, current);
                // After the transition call the reload sees the new status.
                current = ReservationStatus::Confirmed;
                Ok(Some(res))
            });
        reservations
            .expect_transition()
            .withf(|event| {
                event.from == ReservationStatus::Pending
                    && event.to == ReservationStatus::Confirmed
                    && event.payment_status == Some(PaymentStatus::Paid)
                    && event.payment_ref.as_deref() == Some("pi_123")
            })
            .returning(|_| Ok(()));

        let notifier = Arc::new(CountingNotifier::new());
        let service = BookingService::new(
            Arc::new(MockCourtRepo::new()),
            Arc::new(MockScheduleRepo::new()),
            Arc::new(reservations),
            notifier.clone(),
        );

        let confirmed = service
            .confirm(reservation_id, Some("pi_123".into()))
            .await
            .unwrap();
        assert_eq!(confirmed.status, ReservationStatus::Confirmed);
        assert_eq!(notifier.confirmed.load(Ordering::SeqCst), 1);
        assert_eq!(notifier.cancelled.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn confirm_rejects_a_cancelled_reservation() {
        let mut reservations = MockReservationRepo::new();
        reservations.expect_find_by_id().returning(|id| {
            Ok(Some(reservation(
                id,
                CourtId::new(),
                UserId::new(),
                tomorrow_at(14, 0),
                tomorrow_at(15, 0),
                ReservationStatus::Cancelled,
            )))
        });

        let service = service(MockCourtRepo::new(), MockScheduleRepo::new(), reservations);
        let err = service.confirm(ReservationId::new(), None).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
    }

    #[tokio::test]
    async fn cancel_requires_the_original_requester() {
        let requester_id = UserId::new();
        let mut reservations = MockReservationRepo::new();
        reservations.expect_find_by_id().returning(move |id| {
            Ok(Some(reservation(
                id,
                CourtId::new(),
                requester_id,
                tomorrow_at(14, 0),
                tomorrow_at(15, 0),
                ReservationStatus::Pending,
            )))
        });

        let service = service(MockCourtRepo::new(), MockScheduleRepo::new(), reservations);
        let err = service
            .cancel(ReservationId::new(), UserId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ForbiddenOperation));
    }

    #[tokio::test]
    async fn cancel_rejects_a_completed_reservation() {
        let requester_id = UserId::new();
        let mut reservations = MockReservationRepo::new();
        reservations.expect_find_by_id().returning(move |id| {
            Ok(Some(reservation(
                id,
                CourtId::new(),
                requester_id,
                tomorrow_at(14, 0),
                tomorrow_at(15, 0),
                ReservationStatus::Completed,
            )))
        });

        let service = service(MockCourtRepo::new(), MockScheduleRepo::new(), reservations);
        let err = service
            .cancel(ReservationId::new(), requester_id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
    }

    #[tokio::test]
    async fn cancel_notifies_and_keeps_the_payment_status() {
        let requester_id = UserId::new();
        let court_id = CourtId::new();
        let starts_at = tomorrow_at(14, 0);
        let ends_at = tomorrow_at(15, 0);

        let mut reservations = MockReservationRepo::new();
        let mut current = ReservationStatus::Confirmed;
        reservations.expect_find_by_id().returning(move |id| {
            let res = reservation(id, court_id, requester_id, starts_at, ends_at, current);
            current = ReservationStatus::Cancelled;
            Ok(Some(res))
        });
        reservations
            .expect_transition()
            .withf(|event| {
                event.from == ReservationStatus::Confirmed
                    && event.to == ReservationStatus::Cancelled
                    && event.payment_status.is_none()
            })
            .returning(|_| Ok(()));

        let notifier = Arc::new(CountingNotifier::new());
        let service = BookingService::new(
            Arc::new(MockCourtRepo::new()),
            Arc::new(MockScheduleRepo::new()),
            Arc::new(reservations),
            notifier.clone(),
        );

        let cancelled = service
            .cancel(ReservationId::new(), requester_id)
            .await
            .unwrap();
        assert_eq!(cancelled.status, ReservationStatus::Cancelled);
        assert_eq!(notifier.cancelled.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn complete_rejects_a_pending_reservation() {
        let mut reservations = MockReservationRepo::new();
        reservations.expect_find_by_id().returning(|id| {
            Ok(Some(reservation(
                id,
                CourtId::new(),
                UserId::new(),
                tomorrow_at(14, 0),
                tomorrow_at(15, 0),
                ReservationStatus::Pending,
            )))
        });

        let service = service(MockCourtRepo::new(), MockScheduleRepo::new(), reservations);
        let err = service.complete(ReservationId::new()).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
    }

    #[tokio::test]
    async fn free_slots_excludes_booked_ranges() {
        let court_id = CourtId::new();
        let mut courts = MockCourtRepo::new();
        courts
            .expect_find_by_id()
            .returning(|id| Ok(Some(court(id, 1000.0, true))));

        let mut schedules = MockScheduleRepo::new();
        schedules.expect_get_or_create_default().returning(|id| {
            Ok(ScheduleConfig {
                open_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                close_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
                ..ScheduleConfig::default_for(id)
            })
        });

        let date = Local::now().date_naive() + Duration::days(1);
        let booked_start = date.and_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        let booked_end = date.and_time(NaiveTime::from_hms_opt(11, 0, 0).unwrap());
        let mut reservations = MockReservationRepo::new();
        reservations
            .expect_find_live_in_range()
            .returning(move |cid, _, _| {
                Ok(vec![reservation(
                    ReservationId::new(),
                    cid,
                    UserId::new(),
                    booked_start,
                    booked_end,
                    ReservationStatus::Pending,
                )])
            });

        let service = service(courts, schedules, reservations);
        let slots = service.free_slots(court_id, date).await.unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].starts_at.time(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(slots[1].starts_at.time(), NaiveTime::from_hms_opt(11, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn range_probe_reports_the_failing_rule() {
        let mut courts = MockCourtRepo::new();
        courts
            .expect_find_by_id()
            .returning(|id| Ok(Some(court(id, 1000.0, true))));
        let mut schedules = MockScheduleRepo::new();
        schedules
            .expect_get_or_create_default()
            .returning(|id| Ok(ScheduleConfig::default_for(id)));

        let service = service(courts, schedules, MockReservationRepo::new());

        let ok = service
            .is_range_valid(CourtId::new(), tomorrow_at(10, 0), tomorrow_at(11, 0))
            .await
            .unwrap();
        assert!(ok.valid);
        assert!(ok.reason.is_none());

        let bad = service
            .is_range_valid(CourtId::new(), tomorrow_at(10, 0), tomorrow_at(10, 45))
            .await
            .unwrap();
        assert!(!bad.valid);
        assert!(bad.reason.is_some());
    }
}

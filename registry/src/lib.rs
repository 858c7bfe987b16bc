use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::notifier::TracingNotifier;
use adapter::repository::court::CourtRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::reservation::ReservationRepositoryImpl;
use adapter::repository::schedule::ScheduleConfigRepositoryImpl;
use kernel::repository::court::CourtRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::reservation::ReservationRepository;
use kernel::repository::schedule::ScheduleConfigRepository;
use kernel::service::booking::BookingService;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    court_repository: Arc<dyn CourtRepository>,
    schedule_config_repository: Arc<dyn ScheduleConfigRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    booking_service: Arc<BookingService>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let court_repository: Arc<dyn CourtRepository> =
            Arc::new(CourtRepositoryImpl::new(pool.clone()));
        let schedule_config_repository: Arc<dyn ScheduleConfigRepository> =
            Arc::new(ScheduleConfigRepositoryImpl::new(pool.clone()));
        let reservation_repository: Arc<dyn ReservationRepository> =
            Arc::new(ReservationRepositoryImpl::new(pool.clone()));
        let booking_service = Arc::new(BookingService::new(
            court_repository.clone(),
            schedule_config_repository.clone(),
            reservation_repository.clone(),
            Arc::new(TracingNotifier),
        ));
        Self {
            health_check_repository,
            court_repository,
            schedule_config_repository,
            reservation_repository,
            booking_service,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn court_repository(&self) -> Arc<dyn CourtRepository> {
        self.court_repository.clone()
    }

    pub fn schedule_config_repository(&self) -> Arc<dyn ScheduleConfigRepository> {
        self.schedule_config_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }

    pub fn booking_service(&self) -> Arc<BookingService> {
        self.booking_service.clone()
    }
}

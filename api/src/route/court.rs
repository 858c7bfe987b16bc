use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::availability::{check_range, show_free_slots};
use crate::handler::court::{register_court, show_court, show_court_list};
use crate::handler::reservation::create_reservation;
use crate::handler::schedule::{get_schedule_config, put_schedule_config};

pub fn build_court_routers() -> Router<AppRegistry> {
    let courts_routers = Router::new()
        .route("/", post(register_court))
        .route("/", get(show_court_list))
        .route("/:court_id", get(show_court))
        .route("/:court_id/schedule", get(get_schedule_config))
        .route("/:court_id/schedule", put(put_schedule_config))
        .route("/:court_id/slots", get(show_free_slots))
        .route("/:court_id/availability", get(check_range))
        .route("/:court_id/reservations", post(create_reservation));

    Router::new().nest("/courts", courts_routers)
}

pub mod availability;
pub mod court;
pub mod health;
pub mod reservation;
pub mod schedule;

pub mod court;
pub mod health;
pub mod reservation;
pub mod v1;

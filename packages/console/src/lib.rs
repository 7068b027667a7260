pub mod history;
pub mod router;
pub mod views;

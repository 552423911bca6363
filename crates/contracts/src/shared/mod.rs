pub mod calendar;
pub mod persistence;

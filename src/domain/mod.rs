pub mod calendar;
pub mod campaign;
pub mod daily_volume;

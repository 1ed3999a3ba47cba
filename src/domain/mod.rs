pub mod assumptions;
pub mod benchmarks;
pub mod calendar;
pub mod month_record;
pub mod scenario;

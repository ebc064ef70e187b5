pub mod aggregate_row;
pub mod day_record;
pub mod driver;
pub mod presence;

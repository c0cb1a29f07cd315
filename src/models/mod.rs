pub mod activity;
pub mod day_record;
pub mod stats;
pub mod table;

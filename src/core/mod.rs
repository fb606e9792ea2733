pub mod aggregation;
pub mod feed;
pub mod services;

pub mod aggregation;
pub mod lifecycle;
pub mod order;

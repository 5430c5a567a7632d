mod aggregation_test;
mod order_test;

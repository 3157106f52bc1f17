pub mod client;
pub mod exercise_gateway;

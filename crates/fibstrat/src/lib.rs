//! fibstrat library — application logic for the Fibonacci CLI.

pub mod app;
pub mod config;
pub mod errors;

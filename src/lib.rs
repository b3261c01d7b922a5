pub mod config;
pub mod inflow;
pub mod utils;

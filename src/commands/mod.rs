//! Command implementations for the mlb-stats CLI

pub mod endpoints;
pub mod request;
pub mod self_test;

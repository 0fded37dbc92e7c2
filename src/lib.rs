//! Launch Dashboard - filter launch records by site and payload mass and
//! chart the outcomes.

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;

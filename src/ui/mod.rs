//! egui rendering. Every function here reads from `AppState`; only the
//! filter panel writes back, through `AppState::set_*`.

pub mod panels;
pub mod plot;
pub mod table;

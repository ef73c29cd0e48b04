// CarCare - core/mod.rs
//
// Core UI-state logic layer.
// Dependencies: standard library only (plus util constants).
// Must NOT depend on: ui, platform, app, egui, or any I/O.

pub mod gesture;
pub mod layout;
pub mod notice;
pub mod settings;

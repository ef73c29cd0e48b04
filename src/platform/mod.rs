// CarCare - platform/mod.rs
//
// Platform integration: directory resolution and config.toml loading.

pub mod config;

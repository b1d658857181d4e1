#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::web;
use backend::config::stages::default_catalog;
use backend::state::app_state::AppState;

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Application state over the shipped default catalog, wrapped for actix.
pub fn test_state() -> web::Data<AppState> {
    web::Data::new(AppState::new(
        default_catalog().expect("embedded catalog is valid"),
    ))
}

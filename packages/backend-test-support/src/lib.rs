//! Backend test support utilities
//!
//! This crate provides utilities specifically for backend testing: unified
//! logging initialization and problem+json response assertions.

pub mod logging;
pub mod problem_details;

//! Service layer: transport-agnostic orchestration over the domain.

pub mod match_flow;

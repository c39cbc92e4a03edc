//! HTTP handlers: generic resource operations and status probes.

pub mod resource;
pub mod status;

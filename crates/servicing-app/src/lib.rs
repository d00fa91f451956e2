//! Application layer - config, logging, fleet manifests, inspection reports

pub mod config;
pub mod inspection;
pub mod logging;
pub mod manifest;

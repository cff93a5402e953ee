// servo-web-host library
// Serves the slider panels and records the control requests they send

// Configuration and command line
pub mod cli;
pub mod config;

// HTTP surface
pub mod api;
pub mod control;
pub mod server;

// Control request journal
pub mod journal;

// Embedded panel assets (single-binary distribution)
pub mod embedded;

// DocAppointments-api lib.rs
//
// HTTP surface of the doctor appointments service.
// The binary in src/bin/main.rs wires these modules to a JSON data file.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;

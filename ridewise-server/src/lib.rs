//! Ride comparison server.
//!
//! A web application that answers: "How do the train, the MyCiTi bus and
//! an e-hailing ride compare for this trip across Cape Town?"

pub mod domain;
pub mod ehailing;
pub mod formatter;
pub mod myciti;
pub mod rides;
pub mod web;

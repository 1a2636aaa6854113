//! Everything needed to talk to the Todoist API.
pub mod rest;
pub mod serialize;

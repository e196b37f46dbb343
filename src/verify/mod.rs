//! End-to-end verification of the groups and events API.
//!
//! A run authenticates, creates a group and an event, then checks that both
//! show up in the corresponding listings. See [`Runner::run`].

mod result;
mod runner;
mod step;


pub use result::{Aborted, StepResult, VerifyReport};
pub use runner::{
    group_events_path, Runner, GROUPS_PATH, LOGIN_PATH, MY_GROUPS_PATH, REGISTER_PATH,
};
pub use step::Step;

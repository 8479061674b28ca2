pub mod activities;

pub use activities::{ActivitiesSnapshot, Activity};

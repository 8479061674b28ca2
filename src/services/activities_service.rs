use crate::database::ActivityStore;
use crate::error::ActivityError;
use crate::models::{ActivitiesSnapshot, Activity};

pub fn list_activities(store: &ActivityStore) -> ActivitiesSnapshot {
    store.get_all()
}

pub fn load_activity(store: &ActivityStore, name: &str) -> Result<Activity, ActivityError> {
    store.get(name).ok_or_else(|| ActivityError::NotFound {
        activity: name.to_string(),
    })
}

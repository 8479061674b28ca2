use std::sync::{PoisonError, RwLock};

use tracing::warn;

use crate::models::{ActivitiesSnapshot, Activity};

/// Authoritative in-memory collection of activities.
///
/// Activities are fixed at construction; only their participant lists change.
/// All mutation goes through [`ActivityStore::update`], which holds the write
/// lock for the whole check-and-mutate step.
#[derive(Debug, Default)]
pub struct ActivityStore {
    activities: RwLock<Vec<Activity>>,
}

impl ActivityStore {
    /// Builds a store from `activities`, keeping insertion order.
    /// A repeated name is dropped in favour of the first occurrence.
    pub fn new(activities: impl IntoIterator<Item = Activity>) -> Self {
        let mut unique: Vec<Activity> = Vec::new();
        for activity in activities {
            if unique.iter().any(|a| a.name == activity.name) {
                warn!(activity = %activity.name, "duplicate activity name in seed, ignoring");
                continue;
            }
            unique.push(activity);
        }
        Self {
            activities: RwLock::new(unique),
        }
    }

    pub fn get_all(&self) -> ActivitiesSnapshot {
        let activities = self.activities.read().unwrap_or_else(PoisonError::into_inner);
        ActivitiesSnapshot(activities.clone())
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<Activity> {
        let activities = self.activities.read().unwrap_or_else(PoisonError::into_inner);
        activities.iter().find(|a| a.name == name).cloned()
    }

    /// Runs `f` against the named activity under the write lock.
    /// Returns `None` when no activity has that name.
    pub fn update<R>(&self, name: &str, f: impl FnOnce(&mut Activity) -> R) -> Option<R> {
        let mut activities = self
            .activities
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let activity = activities.iter_mut().find(|a| a.name == name)?;
        Some(f(activity))
    }

    pub fn len(&self) -> usize {
        self.activities
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ActivityStore {
        ActivityStore::new([
            Activity::new("Chess Club", "Chess", "Fridays", 12).with_participants(["m@x.edu"]),
            Activity::new("Gym Class", "Gym", "Mondays", 30),
        ])
    }

    #[test]
    fn get_is_exact_and_case_sensitive() {
        let store = store();
        assert!(store.get("Chess Club").is_some());
        assert!(store.get("chess club").is_none());
        assert!(store.get("Chess").is_none());
    }

    #[test]
    fn get_all_preserves_insertion_order() {
        let names: Vec<String> = store().get_all().iter().map(|a| a.name.clone()).collect();
        assert_eq!(names, vec!["Chess Club", "Gym Class"]);
    }

    #[test]
    fn duplicate_names_keep_first() {
        let store = ActivityStore::new([
            Activity::new("Art", "first", "s", 1),
            Activity::new("Art", "second", "s", 1),
        ]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Art").unwrap().description, "first");
    }

    #[test]
    fn update_mutates_in_place() {
        let store = store();
        let len = store.update("Gym Class", |a| {
            a.participants.push("new@x.edu".to_string());
            a.participants.len()
        });
        assert_eq!(len, Some(1));
        assert_eq!(store.get("Gym Class").unwrap().participants, vec!["new@x.edu"]);
        // Snapshots taken earlier are unaffected by later writes.
        let before = store.get_all();
        store.update("Gym Class", |a| a.participants.clear());
        assert_eq!(before.get("Gym Class").unwrap().participants.len(), 1);
    }

    #[test]
    fn update_unknown_activity_is_none() {
        assert_eq!(store().update("Robotics", |_| ()), None);
    }

    #[test]
    fn empty_store() {
        let store = ActivityStore::default();
        assert!(store.is_empty());
        assert!(store.get_all().is_empty());
    }
}

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One extracurricular offering and its roster.
///
/// `name` is the Store key; it is rendered as the enclosing JSON object key
/// rather than as a field of the record itself.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    // Signup order.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in participants {
            let email = email.into();
            if !self.is_registered(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }
}

/// Point-in-time copy of every activity, in Store insertion order.
///
/// Serializes as `{name: {description, schedule, max_participants, participants}}`
/// with keys emitted in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitiesSnapshot(pub Vec<Activity>);

impl ActivitiesSnapshot {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.0.iter()
    }
}

impl Serialize for ActivitiesSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_participants_drops_duplicates() {
        let a = Activity::new("Chess Club", "d", "s", 12)
            .with_participants(["a@b.com", "c@d.com", "a@b.com"]);
        assert_eq!(a.participants, vec!["a@b.com", "c@d.com"]);
    }

    #[test]
    fn snapshot_serializes_as_object_keyed_by_name() {
        let snapshot = ActivitiesSnapshot(vec![
            Activity::new("Zeta", "z", "Mondays", 3).with_participants(["z@x.edu"]),
            Activity::new("Alpha", "a", "Tuesdays", 5),
        ]);

        let json = serde_json::to_string(&snapshot).unwrap();
        // Insertion order, not alphabetical.
        assert!(json.find("\"Zeta\"").unwrap() < json.find("\"Alpha\"").unwrap());

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let zeta = &value["Zeta"];
        assert_eq!(zeta["description"], "z");
        assert_eq!(zeta["schedule"], "Mondays");
        assert_eq!(zeta["max_participants"], 3);
        assert_eq!(zeta["participants"], serde_json::json!(["z@x.edu"]));
        assert!(zeta.get("name").is_none());
        assert_eq!(value["Alpha"]["participants"], serde_json::json!([]));
    }

    #[test]
    fn empty_snapshot_is_empty_object() {
        let json = serde_json::to_value(ActivitiesSnapshot::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn is_full_at_capacity() {
        let a = Activity::new("Tiny", "d", "s", 1);
        assert!(!a.is_full());
        assert!(a.with_participants(["x@y.z"]).is_full());
    }
}

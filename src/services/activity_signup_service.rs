use tracing::{info, warn};

use crate::database::ActivityStore;
use crate::error::ActivityError;

/// Accepts any non-empty email verbatim, whitespace included; no format check is applied.
pub fn require_email(email: Option<&str>) -> Result<&str, ActivityError> {
    match email {
        Some(e) if !e.is_empty() => Ok(e),
        _ => Err(ActivityError::MissingEmail),
    }
}

/// Appends `email` to the roster of `activity_name`.
///
/// The duplicate check (and the capacity check, when `enforce_capacity` is
/// set) runs under the same write lock as the append.
pub fn sign_up(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
    enforce_capacity: bool,
) -> Result<String, ActivityError> {
    let result = store
        .update(activity_name, |activity| {
            if activity.is_registered(email) {
                return Err(ActivityError::AlreadyRegistered {
                    email: email.to_string(),
                    activity: activity.name.clone(),
                });
            }
            if enforce_capacity && activity.is_full() {
                return Err(ActivityError::ActivityFull {
                    activity: activity.name.clone(),
                    max_participants: activity.max_participants,
                });
            }
            activity.participants.push(email.to_string());
            Ok(activity.participants.len())
        })
        .unwrap_or_else(|| {
            Err(ActivityError::NotFound {
                activity: activity_name.to_string(),
            })
        });

    match result {
        Ok(count) => {
            info!(activity = %activity_name, email = %email, participants = count, "signup accepted");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
            Err(e)
        }
    }
}

/// Removes one occurrence of `email` from the roster of `activity_name`.
pub fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let result = store
        .update(activity_name, |activity| {
            let Some(pos) = activity.participants.iter().position(|p| p == email) else {
                return Err(ActivityError::NotRegistered {
                    email: email.to_string(),
                    activity: activity.name.clone(),
                });
            };
            activity.participants.remove(pos);
            Ok(activity.participants.len())
        })
        .unwrap_or_else(|| {
            Err(ActivityError::NotFound {
                activity: activity_name.to_string(),
            })
        });

    match result {
        Ok(count) => {
            info!(activity = %activity_name, email = %email, participants = count, "unregister accepted");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "unregister rejected: {}", e);
            Err(e)
        }
    }
}

use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;

use super::types::{NewUser, User, UserUpdate};
use crate::utils::{validate_email, validate_password, CoachError};

#[derive(Default)]
struct Inner {
    users: HashMap<u64, User>,
    next_id: u64,
}

/// In-memory user registry. Contents are lost on restart.
#[derive(Default)]
pub struct UserStore {
    inner: RwLock<Inner>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register a new user. Emails are unique.
    pub fn create(&self, new_user: NewUser) -> Result<User, CoachError> {
        validate_email(&new_user.email)?;
        validate_password(&new_user.password)?;

        let mut inner = self.inner.write();
        if inner.users.values().any(|u| u.email == new_user.email) {
            return Err(CoachError::Conflict("Email already registered".to_string()));
        }

        // TODO: hash and persist the password once a real user table exists
        inner.next_id += 1;
        let user = User {
            id: inner.next_id,
            email: new_user.email,
            full_name: new_user.full_name,
            created_at: Utc::now(),
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    pub fn get(&self, id: u64) -> Option<User> {
        self.inner.read().users.get(&id).cloned()
    }

    /// Apply the provided fields. Returns `NotFound` for unknown ids and
    /// `Conflict` if the new email belongs to another user.
    pub fn update(&self, id: u64, update: UserUpdate) -> Result<User, CoachError> {
        if let Some(email) = &update.email {
            validate_email(email)?;
        }

        let mut inner = self.inner.write();
        if !inner.users.contains_key(&id) {
            return Err(CoachError::NotFound("User not found".to_string()));
        }
        if let Some(email) = &update.email {
            if inner.users.values().any(|u| u.id != id && &u.email == email) {
                return Err(CoachError::Conflict("Email already registered".to_string()));
            }
        }

        let user = inner
            .users
            .get_mut(&id)
            .ok_or_else(|| CoachError::NotFound("User not found".to_string()))?;

        if let Some(full_name) = update.full_name.filter(|n| !n.is_empty()) {
            user.full_name = full_name;
        }
        if let Some(email) = update.email.filter(|e| !e.is_empty()) {
            user.email = email;
        }

        Ok(user.clone())
    }

    /// Remove a user, returning whether it existed
    pub fn delete(&self, id: u64) -> bool {
        self.inner.write().users.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            full_name: "Ada Lovelace".to_string(),
            password: "Str0ng!Pass".to_string(),
        }
    }

    #[test]
    fn test_create_and_fetch() {
        let store = UserStore::new();
        let user = store.create(new_user("ada@example.com")).unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(store.get(1), Some(user));
        assert_eq!(store.get(2), None);
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let store = UserStore::new();
        store.create(new_user("ada@example.com")).unwrap();

        let err = store.create(new_user("ada@example.com")).unwrap_err();
        assert!(matches!(err, CoachError::Conflict(_)));
        assert!(store.get(2).is_none());
    }

    #[test]
    fn test_invalid_input_rejected() {
        let store = UserStore::new();
        assert!(matches!(
            store.create(new_user("nope")),
            Err(CoachError::ValidationError(_))
        ));

        let mut weak = new_user("ada@example.com");
        weak.password = "password".to_string();
        assert!(matches!(
            store.create(weak),
            Err(CoachError::ValidationError(_))
        ));
        assert!(store.get(1).is_none());
    }

    #[test]
    fn test_partial_update() {
        let store = UserStore::new();
        let user = store.create(new_user("ada@example.com")).unwrap();

        let updated = store
            .update(
                user.id,
                UserUpdate {
                    full_name: Some("Countess Ada".to_string()),
                    email: None,
                },
            )
            .unwrap();
        assert_eq!(updated.full_name, "Countess Ada");
        assert_eq!(updated.email, "ada@example.com");

        assert!(matches!(
            store.update(99, UserUpdate::default()),
            Err(CoachError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_rejects_email_of_another_user() {
        let store = UserStore::new();
        store.create(new_user("ada@example.com")).unwrap();
        let grace = store.create(new_user("grace@example.com")).unwrap();

        let err = store
            .update(
                grace.id,
                UserUpdate {
                    full_name: None,
                    email: Some("ada@example.com".to_string()),
                },
            )
            .unwrap_err();
        assert!(matches!(err, CoachError::Conflict(_)));
        assert_eq!(store.get(grace.id).unwrap().email, "grace@example.com");

        // Re-submitting your own email is not a conflict
        let same = store
            .update(
                grace.id,
                UserUpdate {
                    full_name: None,
                    email: Some("grace@example.com".to_string()),
                },
            )
            .unwrap();
        assert_eq!(same.email, "grace@example.com");
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let store = UserStore::new();
        let first = store.create(new_user("a@example.com")).unwrap();
        assert!(store.delete(first.id));
        assert!(!store.delete(first.id));

        let second = store.create(new_user("b@example.com")).unwrap();
        assert_ne!(second.id, first.id);
    }
}

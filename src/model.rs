//! Person record and request bodies.

use serde::{Deserialize, Serialize};

/// Stored person. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Create body. Both fields are required.
#[derive(Clone, Debug, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
}

/// Update body. Only `name` and `email` are updatable; every other key,
/// `id` included, is dropped during deserialization.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PersonPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl PersonPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    /// Apply present fields to `person`, leaving `id` untouched.
    pub fn apply_to(self, person: &mut Person) {
        if let Some(name) = self.name {
            person.name = name;
        }
        if let Some(email) = self.email {
            person.email = email;
        }
    }
}

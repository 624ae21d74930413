use serde::{Deserialize, Serialize};

/// Stored user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Create input; both fields must be present and non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CreateUserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: Some(name.into()), email: Some(email.into()) }
    }

    /// Returns `(name, email)` when both are set and non-empty.
    pub fn required_fields(self) -> Option<(String, String)> {
        match (present(self.name), present(self.email)) {
            (Some(name), Some(email)) => Some((name, email)),
            _ => None,
        }
    }
}

/// Partial update; only non-empty fields overwrite the stored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UpdateUserInput {
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = present(self.name) {
            user.name = name;
        }
        if let Some(email) = present(self.email) {
            user.email = email;
        }
    }
}

fn present(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

/// Records every fresh process starts with.
pub fn seed_users() -> Vec<User> {
    vec![
        User { id: 1, name: "John Doe".into(), email: "john@example.com".into() },
        User { id: 2, name: "Jane Smith".into(), email: "jane@example.com".into() },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> User {
        seed_users().remove(0)
    }

    #[test]
    fn create_input_requires_both_fields() {
        assert!(CreateUserInput::new("A", "a@b.c").required_fields().is_some());
        assert!(CreateUserInput { name: Some("A".into()), email: None }.required_fields().is_none());
        assert!(CreateUserInput::new("", "").required_fields().is_none());
        assert!(CreateUserInput::default().required_fields().is_none());
    }

    #[test]
    fn update_merges_only_non_empty_fields() {
        let mut user = john();
        UpdateUserInput { name: Some("Updated User".into()), email: None }.apply_to(&mut user);
        assert_eq!(user.name, "Updated User");
        assert_eq!(user.email, "john@example.com");

        UpdateUserInput { name: Some(String::new()), email: Some("new@example.com".into()) }.apply_to(&mut user);
        assert_eq!(user.name, "Updated User");
        assert_eq!(user.email, "new@example.com");
        assert_eq!(user.id, 1);
    }

    #[test]
    fn inputs_deserialize_from_partial_json() {
        let input: UpdateUserInput = serde_json::from_str(r#"{"name":"X"}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("X"));
        assert!(input.email.is_none());
        let input: CreateUserInput = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert!(input.name.is_none());
    }
}

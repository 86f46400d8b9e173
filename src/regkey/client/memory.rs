use crate::client::RegistryClient;
use crate::config::Credentials;
use crate::error::{KeyError, Result};
use crate::model::{KeyRecord, Permission};
use chrono::Utc;
use std::cell::Cell;
use std::collections::BTreeMap;

/// In-process registry double for tests.
///
/// Records keys in a map, counts every trait call, and can be armed to
/// fail the next call with a given error (to exercise the unauthorized
/// and generic API error paths).
#[derive(Default)]
pub struct InMemoryRegistry {
    keys: BTreeMap<String, KeyRecord>,
    fail_next: Cell<Option<KeyError>>,

    pub add_calls: Cell<usize>,
    pub get_calls: Cell<usize>,
    pub list_calls: Cell<usize>,
    pub delete_calls: Cell<usize>,
    pub delete_all_calls: Cell<usize>,

    /// Arguments of the most recent `key_add` call.
    pub last_add: Option<(Option<String>, Vec<Permission>)>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the registry with an existing key.
    pub fn insert(&mut self, record: KeyRecord) {
        self.keys.insert(record.name.clone(), record);
    }

    /// Fail the next trait call with `err`, then resume normal behavior.
    pub fn fail_next(&self, err: KeyError) {
        self.fail_next.set(Some(err));
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn armed_failure(&self) -> Result<()> {
        match self.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// A fully-populated record for seeding tests.
pub fn sample_record(name: &str) -> KeyRecord {
    let now = Utc::now();
    KeyRecord {
        name: name.to_string(),
        inserted_at: now,
        updated_at: now,
        secret: None,
        last_use: Some(crate::model::LastUse {
            ip: "192.0.2.4".to_string(),
            used_at: now,
            user_agent: "regkey-test".to_string(),
        }),
    }
}

impl RegistryClient for InMemoryRegistry {
    fn key_add(
        &mut self,
        _creds: &Credentials,
        name: Option<&str>,
        permissions: &[Permission],
    ) -> Result<KeyRecord> {
        self.add_calls.set(self.add_calls.get() + 1);
        self.last_add = Some((name.map(String::from), permissions.to_vec()));
        self.armed_failure()?;

        let name = match name {
            Some(n) => n.to_string(),
            None => format!("key-{}", self.keys.len() + 1),
        };

        if self.keys.contains_key(&name) {
            return Err(KeyError::Validation {
                message: "Validation error(s)".to_string(),
                errors: vec![("name".to_string(), "has already been taken".to_string())],
            });
        }

        let now = Utc::now();
        let record = KeyRecord {
            name: name.clone(),
            inserted_at: now,
            updated_at: now,
            secret: Some(format!("{}-secret", name)),
            last_use: None,
        };
        self.keys.insert(name, record.clone());
        Ok(record)
    }

    fn key_get(&self, _creds: &Credentials, name: &str) -> Result<KeyRecord> {
        self.get_calls.set(self.get_calls.get() + 1);
        self.armed_failure()?;

        self.keys
            .get(name)
            .cloned()
            .ok_or_else(|| KeyError::KeyNotFound(name.to_string()))
    }

    fn key_list(&self, _creds: &Credentials) -> Result<Vec<KeyRecord>> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.armed_failure()?;

        Ok(self.keys.values().cloned().collect())
    }

    fn key_delete(&mut self, _creds: &Credentials, name: &str) -> Result<()> {
        self.delete_calls.set(self.delete_calls.get() + 1);
        self.armed_failure()?;

        match self.keys.remove(name) {
            Some(_) => Ok(()),
            None => Err(KeyError::KeyNotFound(name.to_string())),
        }
    }

    fn key_delete_all(&mut self, _creds: &Credentials) -> Result<()> {
        self.delete_all_calls.set(self.delete_all_calls.get() + 1);
        self.armed_failure()?;

        self.keys.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials {
            api_url: "https://registry.test/api".to_string(),
            key: "k".to_string(),
        }
    }

    #[test]
    fn add_then_get_then_delete() {
        let mut registry = InMemoryRegistry::new();
        registry.key_add(&creds(), Some("ci"), &[]).unwrap();

        let record = registry.key_get(&creds(), "ci").unwrap();
        assert_eq!(record.name, "ci");

        registry.key_delete(&creds(), "ci").unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn duplicate_name_is_a_validation_error() {
        let mut registry = InMemoryRegistry::new();
        registry.key_add(&creds(), Some("ci"), &[]).unwrap();

        let err = registry.key_add(&creds(), Some("ci"), &[]).unwrap_err();
        assert!(matches!(err, KeyError::Validation { .. }));
    }

    #[test]
    fn armed_failure_fires_once() {
        let registry = InMemoryRegistry::new();
        registry.fail_next(KeyError::Unauthorized);

        assert!(matches!(
            registry.key_list(&creds()),
            Err(KeyError::Unauthorized)
        ));
        assert!(registry.key_list(&creds()).is_ok());
    }
}

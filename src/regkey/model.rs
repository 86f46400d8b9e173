use crate::error::KeyError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four key operations the registry exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Generate,
    Fetch,
    List,
    Revoke,
}

impl Operation {
    /// Which credentials the operation needs: mutating operations require
    /// a write-capable key, read-only operations accept a read key.
    pub fn access_mode(self) -> AccessMode {
        match self {
            Operation::Generate | Operation::Revoke => AccessMode::Write,
            Operation::Fetch | Operation::List => AccessMode::Read,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Generate => "generate",
            Operation::Fetch => "fetch",
            Operation::List => "list",
            Operation::Revoke => "revoke",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Operation {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generate" => Ok(Operation::Generate),
            "fetch" => Ok(Operation::Fetch),
            "list" => Ok(Operation::List),
            "revoke" => Ok(Operation::Revoke),
            other => Err(KeyError::BadCommand(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    Write,
}

/// A single grant attached to a key, e.g. `api:read`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub domain: String,
    pub resource: String,
}

impl Permission {
    pub fn new(domain: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            resource: resource.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastUse {
    pub ip: String,
    pub used_at: DateTime<Utc>,
    pub user_agent: String,
}

/// A key as the registry reports it. `secret` is only present in the
/// response to a generate call and is never shown again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyRecord {
    pub name: String,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(default)]
    pub last_use: Option<LastUse>,
}

/// Options collected from the command line for one invocation.
#[derive(Debug, Clone, Default)]
pub struct KeyOptions {
    pub key_name: Option<String>,
    pub permissions: Vec<String>,
    pub all: bool,
}

/// One invocation as handed over by the host CLI: an operation name plus
/// its options. Consumed once by [`crate::api::KeyApi::dispatch`].
#[derive(Debug, Clone)]
pub struct CommandRequest {
    pub operation: String,
    pub options: KeyOptions,
}

impl CommandRequest {
    pub fn new(operation: impl Into<String>, options: KeyOptions) -> Self {
        Self {
            operation: operation.into(),
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_names_round_trip() {
        for op in [
            Operation::Generate,
            Operation::Fetch,
            Operation::List,
            Operation::Revoke,
        ] {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn unknown_operation_is_rejected() {
        let err = "frobnicate".parse::<Operation>().unwrap_err();
        assert!(matches!(err, KeyError::BadCommand(name) if name == "frobnicate"));
    }

    #[test]
    fn access_modes() {
        assert_eq!(Operation::Generate.access_mode(), AccessMode::Write);
        assert_eq!(Operation::Revoke.access_mode(), AccessMode::Write);
        assert_eq!(Operation::Fetch.access_mode(), AccessMode::Read);
        assert_eq!(Operation::List.access_mode(), AccessMode::Read);
    }
}

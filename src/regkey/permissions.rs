use crate::error::{KeyError, Result};
use crate::model::Permission;

/// Parse user-supplied permission tokens of the form `domain:resource`.
///
/// Each token must contain exactly one colon with non-empty text on both
/// sides. Input order is preserved. An empty slice parses to an empty vec.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Permission>> {
    tokens.iter().map(|t| parse_one(t.as_ref())).collect()
}

fn parse_one(token: &str) -> Result<Permission> {
    let mut parts = token.splitn(2, ':');
    match (parts.next(), parts.next()) {
        (Some(domain), Some(resource))
            if !domain.is_empty() && !resource.is_empty() && !resource.contains(':') =>
        {
            Ok(Permission::new(domain, resource))
        }
        _ => Err(KeyError::InvalidPermissionFormat(token.to_string())),
    }
}

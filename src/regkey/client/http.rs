use crate::client::RegistryClient;
use crate::config::Credentials;
use crate::error::{KeyError, Result};
use crate::model::{KeyRecord, Permission};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP client for the registry's key endpoints.
///
/// Keys live under `/keys`:
/// POST creates, GET fetches (one or all), DELETE revokes (one or all).
/// Every call is single-shot; a failed call surfaces immediately.
pub struct HttpRegistry {
    http: Client,
}

impl HttpRegistry {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("regkey/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| KeyError::Http(e.to_string()))?;
        Ok(Self { http })
    }

    fn url(creds: &Credentials, path: &str) -> String {
        format!("{}/{}", creds.api_url.trim_end_matches('/'), path)
    }

    fn send(&self, req: RequestBuilder, creds: &Credentials) -> Result<Response> {
        req.header("authorization", &creds.key)
            .header("accept", "application/json")
            .send()
            .map_err(|e| KeyError::Http(e.to_string()))
    }
}

/// Error body the registry returns on 4xx responses.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: BTreeMap<String, String>,
}

/// Surface a non-success response as the matching error. `subject` is the
/// key name the request addressed, if any.
fn check(resp: Response, subject: Option<&str>) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body: ApiErrorBody = resp.json().unwrap_or_default();
    Err(map_status(status, body, subject))
}

/// Pure mapping from a failed status plus its error body to the taxonomy.
fn map_status(status: StatusCode, body: ApiErrorBody, subject: Option<&str>) -> KeyError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => KeyError::Unauthorized,
        StatusCode::NOT_FOUND => match subject {
            Some(name) => KeyError::KeyNotFound(name.to_string()),
            None => KeyError::Api("not found".to_string()),
        },
        StatusCode::UNPROCESSABLE_ENTITY => KeyError::Validation {
            message: if body.message.is_empty() {
                "Validation error(s)".to_string()
            } else {
                body.message
            },
            errors: body.errors.into_iter().collect(),
        },
        _ => KeyError::Api(if body.message.is_empty() {
            format!("registry returned {}", status)
        } else {
            body.message
        }),
    }
}

fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    resp.json::<T>()
        .map_err(|e| KeyError::MalformedResult(e.to_string()))
}

impl RegistryClient for HttpRegistry {
    fn key_add(
        &mut self,
        creds: &Credentials,
        name: Option<&str>,
        permissions: &[Permission],
    ) -> Result<KeyRecord> {
        let mut body = json!({ "permissions": permissions });
        if let Some(name) = name {
            body["name"] = json!(name);
        }

        let req = self.http.post(Self::url(creds, "keys")).json(&body);
        let resp = check(self.send(req, creds)?, name)?;
        decode(resp)
    }

    fn key_get(&self, creds: &Credentials, name: &str) -> Result<KeyRecord> {
        let req = self.http.get(Self::url(creds, &format!("keys/{}", name)));
        let resp = check(self.send(req, creds)?, Some(name))?;
        decode(resp)
    }

    fn key_list(&self, creds: &Credentials) -> Result<Vec<KeyRecord>> {
        let req = self.http.get(Self::url(creds, "keys"));
        let resp = check(self.send(req, creds)?, None)?;
        decode(resp)
    }

    fn key_delete(&mut self, creds: &Credentials, name: &str) -> Result<()> {
        let req = self
            .http
            .delete(Self::url(creds, &format!("keys/{}", name)));
        check(self.send(req, creds)?, Some(name))?;
        Ok(())
    }

    fn key_delete_all(&mut self, creds: &Credentials) -> Result<()> {
        let req = self.http.delete(Self::url(creds, "keys"));
        check(self.send(req, creds)?, None)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(message: &str, errors: &[(&str, &str)]) -> ApiErrorBody {
        ApiErrorBody {
            message: message.to_string(),
            errors: errors
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn url_joins_without_double_slash() {
        let creds = Credentials {
            api_url: "https://registry.test/api/".to_string(),
            key: "k".to_string(),
        };
        assert_eq!(
            HttpRegistry::url(&creds, "keys/foo"),
            "https://registry.test/api/keys/foo"
        );
    }

    #[test]
    fn unauthorized_and_forbidden_map_to_unauthorized() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            let err = map_status(status, ApiErrorBody::default(), None);
            assert!(matches!(err, KeyError::Unauthorized));
        }
    }

    #[test]
    fn not_found_with_a_subject_names_the_key() {
        let err = map_status(StatusCode::NOT_FOUND, ApiErrorBody::default(), Some("ci"));
        assert!(matches!(err, KeyError::KeyNotFound(name) if name == "ci"));
    }

    #[test]
    fn not_found_without_a_subject_is_a_plain_api_error() {
        let err = map_status(StatusCode::NOT_FOUND, ApiErrorBody::default(), None);
        assert!(matches!(err, KeyError::Api(msg) if msg == "not found"));
    }

    #[test]
    fn unprocessable_entity_carries_the_field_errors() {
        let err = map_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            body("Validation failed", &[("name", "has already been taken")]),
            Some("ci"),
        );
        match err {
            KeyError::Validation { message, errors } => {
                assert_eq!(message, "Validation failed");
                assert_eq!(
                    errors,
                    vec![("name".to_string(), "has already been taken".to_string())]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn unprocessable_entity_without_a_message_gets_a_default() {
        let err = map_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiErrorBody::default(),
            None,
        );
        assert!(matches!(
            err,
            KeyError::Validation { message, .. } if message == "Validation error(s)"
        ));
    }

    #[test]
    fn other_statuses_use_the_body_message_when_present() {
        let err = map_status(StatusCode::BAD_GATEWAY, body("upstream down", &[]), None);
        assert!(matches!(err, KeyError::Api(msg) if msg == "upstream down"));
    }

    #[test]
    fn other_statuses_fall_back_to_the_status_line() {
        let err = map_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorBody::default(),
            None,
        );
        assert!(matches!(err, KeyError::Api(msg) if msg.contains("500")));
    }
}

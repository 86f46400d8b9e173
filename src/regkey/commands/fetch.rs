use crate::client::RegistryClient;
use crate::commands::CmdResult;
use crate::config::Credentials;
use crate::error::Result;
use crate::render;

pub fn run<C: RegistryClient>(client: &C, creds: &Credentials, name: &str) -> Result<CmdResult> {
    let record = client.key_get(creds, name)?;
    let table = render::render_detail(&record)?;
    Ok(CmdResult::default().with_output(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::memory::{sample_record, InMemoryRegistry};
    use crate::error::KeyError;

    fn creds() -> Credentials {
        Credentials {
            api_url: "https://registry.test/api".to_string(),
            key: "k".to_string(),
        }
    }

    #[test]
    fn renders_the_detail_table() {
        let mut registry = InMemoryRegistry::new();
        registry.insert(sample_record("ci"));

        let result = run(&registry, &creds(), "ci").unwrap();
        let output = result.output.unwrap();
        assert!(output.starts_with("Name"));
        assert!(output.contains("ci"));
    }

    #[test]
    fn unknown_key_is_not_found() {
        let registry = InMemoryRegistry::new();
        let err = run(&registry, &creds(), "nope").unwrap_err();
        assert!(matches!(err, KeyError::KeyNotFound(name) if name == "nope"));
    }

    #[test]
    fn record_without_last_use_never_partially_renders() {
        let mut registry = InMemoryRegistry::new();
        let mut record = sample_record("ci");
        record.last_use = None;
        registry.insert(record);

        let err = run(&registry, &creds(), "ci").unwrap_err();
        assert!(matches!(err, KeyError::MalformedResult(_)));
    }
}

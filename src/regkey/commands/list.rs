use crate::client::RegistryClient;
use crate::commands::CmdResult;
use crate::config::Credentials;
use crate::error::Result;
use crate::render;

pub fn run<C: RegistryClient>(client: &C, creds: &Credentials) -> Result<CmdResult> {
    let records = client.key_list(creds)?;
    let table = render::render_list(&records);
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
    fn empty_registry_renders_header_only() {
        let registry = InMemoryRegistry::new();
        let result = run(&registry, &creds()).unwrap();
        assert_eq!(result.output.unwrap(), "Name  Created\n");
    }

    #[test]
    fn one_row_per_key() {
        let mut registry = InMemoryRegistry::new();
        registry.insert(sample_record("ci"));
        registry.insert(sample_record("laptop"));

        let result = run(&registry, &creds()).unwrap();
        let output = result.output.unwrap();
        assert_eq!(output.lines().count(), 3);
        assert!(output.contains("ci"));
        assert!(output.contains("laptop"));
    }

    #[test]
    fn unauthorized_propagates() {
        let registry = InMemoryRegistry::new();
        registry.fail_next(KeyError::Unauthorized);

        let err = run(&registry, &creds()).unwrap_err();
        assert!(matches!(err, KeyError::Unauthorized));
    }
}

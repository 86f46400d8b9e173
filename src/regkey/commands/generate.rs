use crate::client::RegistryClient;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::Credentials;
use crate::error::Result;
use crate::permissions;

pub fn run<C: RegistryClient>(
    client: &mut C,
    creds: &Credentials,
    name: Option<String>,
    raw_permissions: &[String],
) -> Result<CmdResult> {
    let parsed = permissions::parse(raw_permissions)?;
    let record = client.key_add(creds, name.as_deref(), &parsed)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Key successfully created"));
    if let Some(secret) = &record.secret {
        result.add_message(CmdMessage::info(format!(
            "Secret (shown only once): {}",
            secret
        )));
    }
    Ok(result)
}

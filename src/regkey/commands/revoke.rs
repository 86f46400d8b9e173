use crate::client::RegistryClient;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::Credentials;
use crate::error::Result;

pub fn run<C: RegistryClient>(client: &mut C, creds: &Credentials, name: &str) -> Result<CmdResult> {
    client.key_delete(creds, name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Key successfully revoked"));
    Ok(result)
}

pub fn run_all<C: RegistryClient>(client: &mut C, creds: &Credentials) -> Result<CmdResult> {
    client.key_delete_all(creds)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("All keys successfully revoked"));
    Ok(result)
}

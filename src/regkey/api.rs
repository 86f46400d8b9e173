//! # API Facade
//!
//! [`KeyApi`] is the single entry point for all key operations — the
//! command dispatcher. It owns the registry client and the unresolved
//! config, and per request it:
//!
//! 1. parses the operation name (unknown names fail with `BadCommand`)
//! 2. resolves credentials in the operation's access mode (write for
//!    generate/revoke, read for fetch/list)
//! 3. validates the option shape for the operation
//! 4. dispatches to the matching command module
//!
//! It returns structured `Result<CmdResult>` values and never touches
//! stdout; printing and exit codes belong to the CLI layer.
//!
//! Generic over [`RegistryClient`] so tests run against
//! `InMemoryRegistry` while the binary uses `HttpRegistry`.

use crate::client::RegistryClient;
use crate::commands::{self, CmdResult};
use crate::config::RegistryConfig;
use crate::error::{KeyError, Result};
use crate::model::{CommandRequest, Operation};

pub struct KeyApi<C: RegistryClient> {
    client: C,
    config: RegistryConfig,
}

impl<C: RegistryClient> KeyApi<C> {
    pub fn new(client: C, config: RegistryConfig) -> Self {
        Self { client, config }
    }

    /// Execute one command request, fail-fast on the first error.
    pub fn dispatch(&mut self, request: CommandRequest) -> Result<CmdResult> {
        let op: Operation = request.operation.parse()?;
        let creds = self.config.resolve(op.access_mode())?;
        let opts = request.options;

        match op {
            Operation::Generate => commands::generate::run(
                &mut self.client,
                &creds,
                opts.key_name,
                &opts.permissions,
            ),
            Operation::Fetch => {
                let name = opts
                    .key_name
                    .ok_or(KeyError::MissingRequiredParameter("key-name"))?;
                commands::fetch::run(&self.client, &creds, &name)
            }
            Operation::List => commands::list::run(&self.client, &creds),
            Operation::Revoke => match (opts.all, opts.key_name) {
                (true, None) => commands::revoke::run_all(&mut self.client, &creds),
                (false, Some(name)) => commands::revoke::run(&mut self.client, &creds, &name),
                (true, Some(_)) => Err(KeyError::UnsupportedParameters(
                    "--all cannot be combined with --key-name".to_string(),
                )),
                (false, None) => Err(KeyError::UnsupportedParameters(
                    "revoke requires either --key-name or --all".to_string(),
                )),
            },
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

//! UserIdentityStore - signed-in staff identity and authorization flags

use serde::Serialize;
use shared::command::{Command, IdentityCommand};
use shared::models::UserIdentity;
use tracing::warn;

/// Identity slice
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserIdentityStore {
    identity: UserIdentity,
}

impl UserIdentityStore {
    /// Apply a command. Commands addressed to other stores are ignored.
    pub fn apply(&mut self, command: &Command) {
        let Command::Identity(command) = command else {
            return;
        };
        match command {
            IdentityCommand::Set(input) => {
                if let Some(role) = &input.role {
                    // legacy payload shape: the string grants nothing,
                    // only the boolean flags count
                    warn!(role = %role, "legacy role field on sign-in payload, using boolean flags only");
                }
                self.identity = UserIdentity {
                    id: input.id.clone(),
                    name: input.name.clone(),
                    email: input.email.clone(),
                    phone: input.phone.clone(),
                    is_admin: input.is_admin,
                    is_superuser: input.is_superuser,
                    is_auth: true,
                };
            }
            IdentityCommand::Clear => self.identity = UserIdentity::default(),
        }
    }

    // ===== Selectors =====

    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_auth
    }
}

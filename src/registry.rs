//! The process-wide role table: the host engine owns one registry,
//! extensions register roles into it at load time, and the engine
//! dispatches each role occurrence through it during document builds.

use std::collections::HashMap;

use crate::config::Config;
use crate::error::Error;
use crate::role::{ApiRole, Role, RoleInvocation};
use crate::types::RoleOutput;

/// Maps role names to handlers. Mutated only during extension setup;
/// shared read-only across document builds after that.
#[derive(Default)]
pub struct RoleRegistry {
    /// Registered handlers keyed by role name.
    roles: HashMap<String, Box<dyn Role>>,
}

impl RoleRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        return Self::default();
    }

    /// Register a role under its own name.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateRole` if a role with the same name is
    /// already registered.
    pub fn register(&mut self, role: Box<dyn Role>) -> Result<(), Error> {
        let name = role.name().to_string();
        if self.roles.contains_key(&name) {
            return Err(Error::DuplicateRole { name });
        }
        self.roles.insert(name, role);
        return Ok(());
    }

    /// Dispatch one role occurrence to its handler.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownRole` if no role is registered under the name.
    pub fn handle(&self, name: &str, invocation: &RoleInvocation) -> Result<RoleOutput, Error> {
        let role = self.roles.get(name).ok_or_else(|| Error::UnknownRole {
            name: name.to_string(),
        })?;
        return Ok(role.render(invocation));
    }

    /// Registered role names, sorted alphabetically.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.roles.keys().map(String::as_str).collect();
        names.sort_unstable();
        return names;
    }
}

/// Extension entry point: register this crate's roles into the host
/// engine's registry according to the loaded config.
///
/// # Errors
///
/// Returns `Error::DuplicateRole` if the configured role name collides
/// with a role another extension already registered.
pub fn setup(registry: &mut RoleRegistry, config: &Config) -> Result<(), Error> {
    let role = ApiRole::new(&config.role_name, config.link_target());
    return registry.register(Box::new(role));
}

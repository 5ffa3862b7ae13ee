//! Crate-level error types for apiref diagnostics.

/// All errors in apiref carry enough context to produce a useful diagnostic
/// without a debugger. Each variant names the role or reason for failure.
#[allow(clippy::error_impl_error, reason = "crate-level error type")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A role with this name is already registered; shadowing would make
    /// builds order-dependent.
    #[error("role `{name}` is already registered")]
    DuplicateRole {
        /// Role name that was registered twice.
        name: String,
    },

    /// The role text contained no token.
    #[error("empty reference token")]
    EmptyToken,

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// TOML deserialization failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),

    /// No role is registered under the given name.
    #[error("unknown role: `{name}`")]
    UnknownRole {
        /// Role name that was not found in the registry.
        name: String,
    },
}

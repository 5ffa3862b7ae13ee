//! Inline API reference roles for documentation builds.
//!
//! A host documentation engine registers this extension's role into its
//! role table; document authors then write a dotted symbol token inside
//! the role and get back a hyperlink into the generated API doc tree,
//! relative to wherever the current document sits:
//!
//! ```
//! use std::path::Path;
//!
//! use apiref::resolver::{self, LinkTarget};
//! use apiref::types::Token;
//!
//! let token = Token::new("pkg.sub.Cls").unwrap();
//! let link = resolver::resolve(
//!     &token,
//!     Path::new("/docs/guide/advanced"),
//!     Path::new("/docs"),
//!     &LinkTarget::default(),
//! );
//! assert_eq!(link.label, "Cls");
//! assert_eq!(link.uri, "../../api/pkg/sub/Cls.html");
//! ```
//!
//! The host engine integrates through [`registry::setup`], which loads
//! nothing itself: configuration comes from [`config::Config`], and each
//! role occurrence is dispatched through [`registry::RoleRegistry::handle`].

pub mod config;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod role;
pub mod types;

pub use config::Config;
pub use error::Error;
pub use registry::{RoleRegistry, setup};
pub use role::{ApiRole, Role, RoleInvocation};
pub use types::{Level, Node, ResolvedLink, RoleContext, RoleOutput, SystemMessage, Token};

//! Role handlers: what runs when the host engine encounters an inline
//! role occurrence in a source document.

use std::collections::BTreeMap;

use crate::resolver::{self, LinkTarget};
use crate::types::{Level, Node, RoleContext, RoleOutput, SystemMessage, Token};

/// One occurrence of an inline role in a source document, as handed over
/// by the host engine.
#[derive(Debug, Clone)]
pub struct RoleInvocation {
    /// Directive body content, line by line. Empty for inline roles.
    pub content: Vec<String>,
    /// Paths of the current document and the root/index document.
    pub context: RoleContext,
    /// One-based line number of the occurrence in the source document.
    pub line: u32,
    /// Options attached to the occurrence by the host engine.
    pub options: BTreeMap<String, String>,
    /// The occurrence exactly as written in the source, markup included.
    pub raw_text: String,
    /// Name the role was invoked under.
    pub role_name: String,
    /// The interpreted text between the role markers.
    pub text: String,
}

/// An inline text role: a name plus a handler the host engine calls once
/// per occurrence. Handlers never abort the build; problems come back as
/// system messages in the output.
pub trait Role: Send + Sync {
    /// Name the role registers under.
    fn name(&self) -> &str;

    /// Render one occurrence into nodes and messages.
    fn render(&self, invocation: &RoleInvocation) -> RoleOutput;
}

/// The API reference role: the invocation text is a dotted symbol token,
/// rendered as a hyperlink into the generated API doc tree.
pub struct ApiRole {
    /// Name this role instance registers under.
    name: String,
    /// Layout of the generated API pages resolved links point at.
    target: LinkTarget,
}

impl ApiRole {
    /// Create the role under the given name, linking into the given layout.
    pub fn new(name: &str, target: LinkTarget) -> Self {
        Self {
            name: name.to_string(),
            target,
        }
    }
}

impl Role for ApiRole {
    /// The configured role name.
    fn name(&self) -> &str {
        &self.name
    }

    /// Resolve the token and emit a single reference node. A malformed
    /// token degrades to a literal node plus an error-level message.
    fn render(&self, invocation: &RoleInvocation) -> RoleOutput {
        let token = match Token::new(&invocation.text) {
            Ok(t) => t,
            Err(e) => return degraded_output(invocation, &e.to_string()),
        };

        let link = resolver::resolve(
            &token,
            invocation.context.source_dir(),
            invocation.context.root_dir(),
            &self.target,
        );

        RoleOutput {
            messages: Vec::new(),
            nodes: vec![Node::Reference {
                label: link.label,
                target: link.uri,
            }],
        }
    }
}

/// Build the output for an occurrence that cannot render as a link:
/// the raw text verbatim, plus an error message naming the line.
fn degraded_output(invocation: &RoleInvocation, reason: &str) -> RoleOutput {
    RoleOutput {
        messages: vec![SystemMessage {
            level: Level::Error,
            line: invocation.line,
            text: format!("{}: {reason}", invocation.role_name),
        }],
        nodes: vec![Node::Literal {
            text: invocation.raw_text.clone(),
        }],
    }
}

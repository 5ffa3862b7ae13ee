/// Core domain types for tokens, resolved links, and role context.
use std::path::{Path, PathBuf};

use crate::error::Error;

/// A dot-separated API symbol token as written by a document author,
/// e.g. `pkg.sub.ClassName`. Newtype guarantees the text is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Parse a token from the raw role text.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyToken` if the trimmed text is empty.
    pub fn new(text: &str) -> Result<Self, Error> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyToken);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The full token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The display label: text after the final `.`, or the whole
    /// token when it contains no dot.
    pub fn label(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// The dot-separated segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        return self.0.split('.');
    }
}

impl std::fmt::Display for Token {
    /// Print the full dotted token.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{}", self.0);
    }
}

/// Output pair of the reference resolver. Computed fresh per invocation;
/// no state survives the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    /// Human-readable display text (the token's last segment).
    pub label: String,
    /// Relative URI from the current document to the API doc page.
    pub uri: String,
}

/// Host-provided paths for one document being processed: the document
/// itself and the designated root/index document. Only the containing
/// directories matter for link resolution.
#[derive(Debug, Clone)]
pub struct RoleContext {
    /// Absolute filesystem path of the root/index document.
    pub root_path: PathBuf,
    /// Absolute filesystem path of the document currently being processed.
    pub source_path: PathBuf,
}

impl RoleContext {
    /// Directory containing the root/index document.
    pub fn root_dir(&self) -> &Path {
        self.root_path.parent().unwrap_or(&self.root_path)
    }

    /// Directory containing the current document.
    pub fn source_dir(&self) -> &Path {
        self.source_path.parent().unwrap_or(&self.source_path)
    }
}

/// A render node handed back to the host engine in place of the role text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Plain text fallback used when a role cannot produce a link.
    Literal {
        /// The raw text to render verbatim.
        text: String,
    },
    /// A hyperlink with a display label and a target URI.
    Reference {
        /// Display text of the link.
        label: String,
        /// Relative URI the link points at.
        target: String,
    },
}

/// Severity of a system message reported back to the host engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// The role could not render; output degrades to a literal node.
    Error,
    /// The role rendered but something looked suspect.
    Warning,
}

/// A diagnostic attached to a role occurrence, reported to the host
/// engine alongside the render nodes rather than aborting the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemMessage {
    /// Message severity.
    pub level: Level,
    /// One-based line number of the role occurrence in the source document.
    pub line: u32,
    /// Human-readable description.
    pub text: String,
}

/// What a role handler returns for one occurrence: render nodes plus
/// any system messages.
#[derive(Debug, Clone, Default)]
pub struct RoleOutput {
    /// Diagnostics for the host engine to report.
    pub messages: Vec<SystemMessage>,
    /// Nodes to render in place of the role text.
    pub nodes: Vec<Node>,
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::{RoleContext, Token};

    #[test]
    fn label_of_dotted_token_is_last_segment() {
        let token = Token::new("a.b.C").unwrap();
        assert_eq!(token.label(), "C");
    }

    #[test]
    fn label_of_bare_token_is_whole_token() {
        let token = Token::new("Foo").unwrap();
        assert_eq!(token.label(), "Foo");
    }

    #[test]
    fn empty_token_is_rejected() {
        assert!(Token::new("").is_err());
        assert!(Token::new("   ").is_err());
    }

    #[test]
    fn segments_split_on_dots() {
        let token = Token::new("pkg.sub.Cls").unwrap();
        let segments: Vec<&str> = token.segments().collect();
        assert_eq!(segments, vec!["pkg", "sub", "Cls"]);
    }

    #[test]
    fn context_dirs_strip_the_document_filename() {
        let context = RoleContext {
            root_path: PathBuf::from("/docs/index.rst"),
            source_path: PathBuf::from("/docs/guide/usage.rst"),
        };
        assert_eq!(context.root_dir(), Path::new("/docs"));
        assert_eq!(context.source_dir(), Path::new("/docs/guide"));
    }
}

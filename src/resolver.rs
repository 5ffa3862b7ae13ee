//! Reference resolution: a dotted token plus the current document's
//! location become a relative URI into the generated API docs.

use std::path::Path;

use crate::types::{ResolvedLink, Token};

/// Where resolved links point: the directory of generated API pages
/// (relative to the documentation root) and the page file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    /// Directory under the documentation root holding API pages.
    pub api_dir: String,
    /// File extension of API pages, without the leading dot.
    pub extension: String,
}

impl Default for LinkTarget {
    /// Generated pages live under `api/` as `.html` files.
    fn default() -> Self {
        Self {
            api_dir: "api".to_string(),
            extension: "html".to_string(),
        }
    }
}

/// Resolve a token against the current document's directory and the
/// documentation root directory.
///
/// The URI ascends from `source_dir` to `root_dir` (one `../` per
/// directory level), then descends into the API page tree: the token's
/// dots become path separators and the page extension is appended. The
/// label is the token's last segment.
///
/// Pure function of its inputs: no I/O, no mutation, no hidden state.
pub fn resolve(
    token: &Token,
    source_dir: &Path,
    root_dir: &Path,
    target: &LinkTarget,
) -> ResolvedLink {
    let depth = ascent_depth(source_dir, root_dir);

    let mut uri = "../".repeat(depth);
    uri.push_str(&target.api_dir);
    uri.push('/');
    uri.push_str(&token.as_str().replace('.', "/"));
    uri.push('.');
    uri.push_str(&target.extension);

    ResolvedLink {
        label: token.label().to_string(),
        uri,
    }
}

/// Number of directory levels between `source_dir` and `root_dir`.
///
/// Zero when the document sits at the root. A `source_dir` outside the
/// root tree also yields zero: the document is treated as if it were at
/// the root rather than producing a garbage ascent prefix.
fn ascent_depth(source_dir: &Path, root_dir: &Path) -> usize {
    source_dir
        .strip_prefix(root_dir)
        .map_or(0, |relative| relative.components().count())
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use std::path::Path;

    use super::{LinkTarget, ascent_depth, resolve};
    use crate::types::Token;

    /// Resolve with the default target layout.
    fn resolve_default(token: &str, source_dir: &str, root_dir: &str) -> (String, String) {
        let token = Token::new(token).unwrap();
        let link = resolve(
            &token,
            Path::new(source_dir),
            Path::new(root_dir),
            &LinkTarget::default(),
        );
        (link.label, link.uri)
    }

    #[test]
    fn document_at_root_has_no_ascent() {
        let (label, uri) = resolve_default("pkg.Cls", "/docs", "/docs");
        assert_eq!(label, "Cls");
        assert_eq!(uri, "api/pkg/Cls.html");
    }

    #[test]
    fn nested_document_ascends_one_level_per_directory() {
        let (label, uri) = resolve_default("pkg.Cls", "/docs/guide/advanced", "/docs");
        assert_eq!(label, "Cls");
        assert_eq!(uri, "../../api/pkg/Cls.html");
    }

    #[test]
    fn bare_token_links_to_a_top_level_page() {
        let (label, uri) = resolve_default("Foo", "/docs", "/docs");
        assert_eq!(label, "Foo");
        assert_eq!(uri, "api/Foo.html");
    }

    #[test]
    fn deeply_dotted_token_becomes_a_deep_path() {
        let (_, uri) = resolve_default("org.jeo.map.Style", "/docs/usage", "/docs");
        assert_eq!(uri, "../api/org/jeo/map/Style.html");
    }

    #[test]
    fn ascent_matches_directory_depth() {
        let root = Path::new("/docs");
        assert_eq!(ascent_depth(Path::new("/docs"), root), 0);
        assert_eq!(ascent_depth(Path::new("/docs/a"), root), 1);
        assert_eq!(ascent_depth(Path::new("/docs/a/b/c"), root), 3);
    }

    #[test]
    fn source_outside_root_is_treated_as_at_root() {
        assert_eq!(ascent_depth(Path::new("/elsewhere/a"), Path::new("/docs")), 0);
    }

    #[test]
    fn resolution_is_deterministic() {
        let first = resolve_default("pkg.sub.Cls", "/docs/guide", "/docs");
        let second = resolve_default("pkg.sub.Cls", "/docs/guide", "/docs");
        assert_eq!(first, second);
    }

    #[test]
    fn custom_target_layout_is_honored() {
        let token = Token::new("pkg.Cls").unwrap();
        let target = LinkTarget {
            api_dir: "reference".to_string(),
            extension: "xhtml".to_string(),
        };
        let link = resolve(&token, Path::new("/docs/a"), Path::new("/docs"), &target);
        assert_eq!(link.uri, "../reference/pkg/Cls.xhtml");
    }
}

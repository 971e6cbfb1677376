//! Namespace handling for manifest elements and attributes.
//!
//! Names are compared by namespace URI and local name, never by the prefix a
//! producer happened to declare.

use crate::odf::constants::{MANIFESTNS, MANIFEST_PREFIX};

/// Namespace URIs with their conventional prefixes, used for display only
const KNOWN_PREFIXES: &[(&str, &str)] = &[
    (MANIFESTNS, MANIFEST_PREFIX),
    ("http://www.w3.org/XML/1998/namespace", "xml"),
    ("http://www.w3.org/2000/09/xmldsig#", "dsig"),
    ("http://www.w3.org/2001/04/xmlenc#", "xmlenc"),
];

// ============================================================================
// QUALIFIED NAME
// ============================================================================

/// Qualified name with namespace support
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Namespace URI
    pub namespace_uri: Option<String>,
    /// Local name (without prefix)
    pub local_name: String,
    /// Full qualified name (with prefix if present)
    pub qualified_name: String,
}

impl QualifiedName {
    /// Create a new qualified name
    ///
    /// Note: A clone of `local_name` is necessary when no prefix is needed,
    /// as both fields must be owned strings in the struct.
    pub fn new(namespace_uri: Option<String>, local_name: String) -> Self {
        let qualified_name = match namespace_uri.as_deref().and_then(uri_to_prefix) {
            Some(prefix) => format!("{}:{}", prefix, local_name),
            None => local_name.clone(),
        };

        Self {
            namespace_uri,
            local_name,
            qualified_name,
        }
    }

    /// Check if this name is `local_name` in namespace `uri`
    #[inline]
    pub fn is(&self, uri: &str, local_name: &str) -> bool {
        self.namespace_uri.as_deref() == Some(uri) && self.local_name == local_name
    }
}

#[inline]
fn uri_to_prefix(uri: &str) -> Option<&'static str> {
    KNOWN_PREFIXES
        .iter()
        .find(|(known, _)| *known == uri)
        .map(|(_, prefix)| *prefix)
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.qualified_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_name_uses_standard_prefix() {
        let name = QualifiedName::new(Some(MANIFESTNS.to_string()), "full-path".to_string());
        assert_eq!(name.to_string(), "manifest:full-path");
        assert!(name.is(MANIFESTNS, "full-path"));
        assert!(!name.is(MANIFESTNS, "salt"));
    }

    #[test]
    fn test_unknown_namespace_keeps_local_name() {
        let name = QualifiedName::new(Some("urn:example".to_string()), "salt".to_string());
        assert_eq!(name.to_string(), "salt");
        assert!(name.is("urn:example", "salt"));
        assert!(!name.is(MANIFESTNS, "salt"));
    }

    #[test]
    fn test_unbound_name() {
        let name = QualifiedName::new(None, "salt".to_string());
        assert_eq!(name.to_string(), "salt");
        assert!(!name.is(MANIFESTNS, "salt"));
    }
}

//! Identifier helpers for destination resources.

/// Symbols used for random identifier bodies.
pub const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of the random body of workspace, api-spec and base-environment ids.
pub const RESOURCE_ID_LENGTH: usize = 20;

/// Length of the random body of header, parameter and form-field pair ids.
pub const PAIR_ID_LENGTH: usize = 10;

/// Kind of destination record an identifier belongs to.
///
/// Each kind maps to the short prefix the export format uses at the start
/// of its `_id` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Root workspace.
    Workspace,
    /// Api-specification stub attached to the workspace.
    ApiSpec,
    /// Base or converted environment.
    Environment,
    /// Folder equivalent.
    RequestGroup,
    /// Single HTTP request.
    Request,
    /// Header, parameter or form-field entry.
    Pair,
}

impl ResourceKind {
    /// Returns the identifier prefix for this kind.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Workspace => "wrk",
            Self::ApiSpec => "spc",
            Self::Environment => "env",
            Self::RequestGroup => "fld",
            Self::Request => "req",
            Self::Pair => "pair",
        }
    }

    /// Derives a destination id from a source identifier.
    ///
    /// ```
    /// use porter_domain::ResourceKind;
    ///
    /// assert_eq!(ResourceKind::Request.id_for("a-b-c"), "req_abc");
    /// ```
    #[must_use]
    pub fn id_for(self, source_id: &str) -> String {
        format!("{}_{}", self.prefix(), normalize_id(source_id))
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Strips every hyphen from a source identifier so it can be embedded in a
/// destination id.
#[must_use]
pub fn normalize_id(id: &str) -> String {
    id.replace('-', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uuid() {
        assert_eq!(
            normalize_id("6f1b2c9e-0d4a-4a8e-9c3b-1e2f3a4b5c6d"),
            "6f1b2c9e0d4a4a8e9c3b1e2f3a4b5c6d"
        );
    }

    #[test]
    fn test_normalize_keeps_other_characters() {
        assert_eq!(normalize_id("a.b_c"), "a.b_c");
        assert_eq!(normalize_id(""), "");
    }

    #[test]
    fn test_id_for_each_kind() {
        assert_eq!(ResourceKind::RequestGroup.id_for("f-1"), "fld_f1");
        assert_eq!(ResourceKind::Environment.id_for("e-1"), "env_e1");
        assert_eq!(ResourceKind::Pair.prefix(), "pair");
        assert_eq!(ResourceKind::Workspace.to_string(), "wrk");
    }

    #[test]
    fn test_alphabet_has_62_symbols() {
        assert_eq!(ID_ALPHABET.len(), 62);
        assert!(ID_ALPHABET.iter().all(u8::is_ascii_alphanumeric));
    }
}

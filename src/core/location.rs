//! The location hash — the one piece of shareable navigation state.
//!
//! Setting the hash is how anything navigates; a change fires the
//! transition handler, setting the same value again does not.

/// Hash shown when none is given.
pub const DEFAULT_HASH: &str = "landing";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    hash: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            hash: DEFAULT_HASH.to_string(),
        }
    }
}

impl Location {
    /// Parse `#about` or `about`.  Empty input gives the default hash.
    pub fn parse(fragment: &str) -> Self {
        let hash = fragment.trim().trim_start_matches('#');
        if hash.is_empty() {
            Self::default()
        } else {
            Self {
                hash: hash.to_string(),
            }
        }
    }

    /// The hash without the leading `#`.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Set the hash.  Returns `true` if it changed (i.e. a `hashchange`).
    pub fn set_hash(&mut self, fragment: &str) -> bool {
        let next = Self::parse(fragment);
        if next.hash == self.hash {
            return false;
        }
        self.hash = next.hash;
        true
    }

    /// `#about`, as it would appear in a URL.
    pub fn display(&self) -> String {
        format!("#{}", self.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_marker() {
        assert_eq!(Location::parse("#about").hash(), "about");
        assert_eq!(Location::parse("skills").hash(), "skills");
        assert_eq!(Location::parse("").hash(), DEFAULT_HASH);
        assert_eq!(Location::parse("#").hash(), DEFAULT_HASH);
    }

    #[test]
    fn set_hash_reports_changes_only() {
        let mut location = Location::default();
        assert!(!location.set_hash("#landing"));
        assert!(location.set_hash("#about"));
        assert!(!location.set_hash("about"));
        assert_eq!(location.display(), "#about");
    }
}

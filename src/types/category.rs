//! Category hierarchy types

/// A parent/child category pair
///
/// Parent categories with no children produce a single pair with
/// `child == None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPair {
    /// ID of the top-level category
    pub parent: String,

    /// ID of one of its children
    pub child: Option<String>,
}

impl CategoryPair {
    /// Create a new pair
    pub fn new(parent: impl Into<String>, child: Option<String>) -> Self {
        CategoryPair {
            parent: parent.into(),
            child,
        }
    }
}

//! The action catalog: which actions each API resource allows.
//!
//! A catalog maps dotted resource paths (`bulk.activities`) to an ordered
//! list of [`ActionSpec`]s. It is read once, when the resource tree is
//! built, and never changes afterwards.
//!
//! # Format
//!
//! ```json
//! {
//!   "contacts": [
//!     { "name": "list", "method": "GET", "url": "/v2/contacts" },
//!     { "name": "get", "method": "GET", "url": "/v2/contacts/{id}" }
//!   ]
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use constant_contact::rest::{ActionCatalog, ActionSpec};
//! use constant_contact::HttpMethod;
//!
//! let catalog = ActionCatalog::from_entries([(
//!     "a.b",
//!     vec![ActionSpec::new("get", HttpMethod::Get, "/v2/a/b")],
//! )])
//! .unwrap();
//!
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.actions("a.b").unwrap()[0].name, "get");
//! ```

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use crate::clients::HttpMethod;
use crate::rest::errors::CatalogError;

/// The built-in catalog of Constant Contact v2 endpoints.
const BUILTIN_CATALOG: &str = include_str!("api.json");

/// One allowed action on a resource.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ActionSpec {
    /// The action's callable name (`get`, `list`, `create`, ...).
    pub name: String,
    /// The HTTP method the action uses.
    pub method: HttpMethod,
    /// The URL template, usually starting with a version segment.
    pub url: String,
}

impl ActionSpec {
    /// Creates a new action specification.
    #[must_use]
    pub fn new(name: impl Into<String>, method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            url: url.into(),
        }
    }
}

/// A validated mapping from dotted resource paths to their actions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionCatalog {
    entries: BTreeMap<String, Vec<ActionSpec>>,
}

impl ActionCatalog {
    /// Loads the catalog of Constant Contact endpoints shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the bundled catalog is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parses and validates a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for invalid JSON, or any validation
    /// error from [`from_entries`](Self::from_entries).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, Vec<ActionSpec>> = serde_json::from_str(json)?;
        Self::from_entries(raw)
    }

    /// Builds a catalog from `(path, actions)` pairs.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::EmptySegment`] if a path has an empty segment
    /// - [`CatalogError::DuplicatePath`] if a path appears twice
    /// - [`CatalogError::DuplicateAction`] if an action name repeats within a path
    pub fn from_entries<P, I>(entries: I) -> Result<Self, CatalogError>
    where
        P: Into<String>,
        I: IntoIterator<Item = (P, Vec<ActionSpec>)>,
    {
        let mut catalog = BTreeMap::new();

        for (path, actions) in entries {
            let path = path.into();

            if path.split('.').any(str::is_empty) {
                return Err(CatalogError::EmptySegment { path });
            }

            let mut seen = HashSet::new();
            if let Some(duplicate) = actions.iter().find(|a| !seen.insert(a.name.as_str())) {
                return Err(CatalogError::DuplicateAction {
                    action: duplicate.name.clone(),
                    path,
                });
            }

            if catalog.contains_key(&path) {
                return Err(CatalogError::DuplicatePath { path });
            }
            catalog.insert(path, actions);
        }

        Ok(Self { entries: catalog })
    }

    /// Returns the number of resource paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the actions allowed for a path.
    #[must_use]
    pub fn actions(&self, path: &str) -> Option<&[ActionSpec]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    /// Iterates over `(path, actions)` entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ActionSpec])> {
        self.entries
            .iter()
            .map(|(path, actions)| (path.as_str(), actions.as_slice()))
    }
}

//! The resource tree built from an action catalog.
//!
//! Each catalog entry becomes a [`ResourceNode`] exposing exactly the
//! actions the entry lists. Nodes are placed in a [`ResourceTree`] at the
//! position given by their dotted path: `bulk.activities` lives under the
//! `bulk` level, and `bulk.activities.add_contacts` under the level that
//! also holds the `bulk.activities` node. Shared prefixes resolve to one
//! level.
//!
//! # Example
//!
//! ```rust
//! use constant_contact::rest::{ActionCatalog, ActionSpec, ResourceTree};
//! use constant_contact::auth::ClientHandle;
//! use constant_contact::{ConstantContactConfig, HttpMethod};
//!
//! let catalog = ActionCatalog::from_entries([
//!     ("a.b", vec![ActionSpec::new("get", HttpMethod::Get, "/v2/b")]),
//!     ("a.c", vec![
//!         ActionSpec::new("get", HttpMethod::Get, "/v2/c"),
//!         ActionSpec::new("create", HttpMethod::Post, "/v2/c"),
//!     ]),
//! ])
//! .unwrap();
//!
//! let handle = ClientHandle::new(ConstantContactConfig::new("key", "token").unwrap()).unwrap();
//! let tree = ResourceTree::build(&catalog, &handle);
//!
//! assert!(tree.resource("a.b").unwrap().has_action("get"));
//! assert!(!tree.resource("a.b").unwrap().has_action("create"));
//! assert!(tree.resource("a").is_none());
//! assert_eq!(tree.child("a").unwrap().children().count(), 2);
//! ```

use std::collections::BTreeMap;

use serde_json::Value;

use crate::auth::ClientHandle;
use crate::clients::HttpResponse;
use crate::rest::catalog::{ActionCatalog, ActionSpec};
use crate::rest::errors::ResourceError;
use crate::rest::invoke::invoke;

/// A callable API resource: one catalog entry bound to the client handle.
#[derive(Clone, Debug)]
pub struct ResourceNode {
    path: String,
    actions: Vec<ActionSpec>,
    handle: ClientHandle,
}

impl ResourceNode {
    /// Creates a node for `path` with the given actions.
    #[must_use]
    pub fn new(path: impl Into<String>, actions: Vec<ActionSpec>, handle: ClientHandle) -> Self {
        Self {
            path: path.into(),
            actions,
            handle,
        }
    }

    /// Returns the node's dotted path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the names of the node's actions in catalog order.
    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|a| a.name.as_str())
    }

    /// Returns the specification of one action.
    #[must_use]
    pub fn action(&self, name: &str) -> Option<&ActionSpec> {
        self.actions.iter().find(|a| a.name == name)
    }

    /// Returns `true` if the node allows `name`.
    #[must_use]
    pub fn has_action(&self, name: &str) -> bool {
        self.action(name).is_some()
    }

    /// Calls one of the node's actions.
    ///
    /// `params` is the call's parameter bag (see [`build_request`](crate::rest::build_request)).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownAction`] if the node does not list
    /// `action`, or [`ResourceError::Http`] if the request fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let contacts = client.resource("contacts").unwrap();
    /// let page = contacts.call("list", json!({"limit": 50})).await?;
    /// ```
    pub async fn call(&self, action: &str, params: Value) -> Result<HttpResponse, ResourceError> {
        let spec = self
            .action(action)
            .ok_or_else(|| ResourceError::UnknownAction {
                path: self.path.clone(),
                action: action.to_string(),
            })?;

        Ok(invoke(&self.handle, spec.method, &spec.url, params).await?)
    }
}

/// One level of the nested resource structure.
///
/// A level may hold a node, child levels, or both.
#[derive(Clone, Debug, Default)]
pub struct ResourceTree {
    node: Option<ResourceNode>,
    children: BTreeMap<String, ResourceTree>,
}

// Verify the tree is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceTree>();
    assert_send_sync::<ResourceNode>();
};

impl ResourceTree {
    /// Builds the tree for every entry in `catalog`.
    #[must_use]
    pub fn build(catalog: &ActionCatalog, handle: &ClientHandle) -> Self {
        let mut root = Self::default();

        for (path, actions) in catalog.iter() {
            tracing::debug!("Setting up resource for {}", path);
            root.insert(
                path,
                ResourceNode::new(path, actions.to_vec(), handle.clone()),
            );
        }

        root
    }

    fn insert(&mut self, path: &str, node: ResourceNode) {
        let mut level = self;
        for segment in path.split('.') {
            level = level.children.entry(segment.to_string()).or_default();
        }
        level.node = Some(node);
    }

    /// Returns the level at a dotted path.
    #[must_use]
    pub fn subtree(&self, path: &str) -> Option<&Self> {
        path.split('.')
            .try_fold(self, |level, segment| level.children.get(segment))
    }

    /// Returns the node at a dotted path.
    #[must_use]
    pub fn resource(&self, path: &str) -> Option<&ResourceNode> {
        self.subtree(path).and_then(Self::node)
    }

    /// Returns the direct child level named `segment`.
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<&Self> {
        self.children.get(segment)
    }

    /// Returns this level's node, if it has one.
    #[must_use]
    pub const fn node(&self) -> Option<&ResourceNode> {
        self.node.as_ref()
    }

    /// Iterates over direct child levels by segment name.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Self)> {
        self.children
            .iter()
            .map(|(segment, level)| (segment.as_str(), level))
    }

    /// Returns the paths of all nodes at or below this level, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        let mut stack: Vec<&Self> = vec![self];
        while let Some(level) = stack.pop() {
            if let Some(node) = &level.node {
                paths.push(node.path.clone());
            }
            stack.extend(level.children.values());
        }
        paths.sort();
        paths
    }
}

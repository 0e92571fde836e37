//! Group name extraction.
//!
//! Walks `root > groups > group` using immediate children only and collects
//! each `group`'s `name` attribute in document order.

use crate::dom::Element;
use crate::error::StatusError;
use serde::{Deserialize, Serialize};
use tracing::warn;

const GROUPS_TAG: &str = "groups";
const GROUP_TAG: &str = "group";
const NAME_ATTR: &str = "name";

/// What to do with a `group` element that has no `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingNamePolicy {
    /// Leave it out of the result and log a warning.
    #[default]
    Skip,
    /// Stop with [`StatusError::MissingGroupName`].
    Fail,
}

/// Group names under `root`, skipping unnamed groups.
pub fn frontend_groups(root: &Element) -> Vec<String> {
    let mut names = Vec::new();
    for_each_group(root, |container, position, group| {
        match group.attribute(NAME_ATTR) {
            Some(name) => names.push(name.to_string()),
            None => warn!(
                "skipping group {position} in groups container {container}: no name attribute"
            ),
        }
    });
    names
}

/// Group names under `root` with an explicit policy for unnamed groups.
///
/// Every `groups` child of the root is visited, not only the first, and
/// names come back in document order with duplicates kept.
pub fn frontend_groups_with(
    root: &Element,
    policy: MissingNamePolicy,
) -> Result<Vec<String>, StatusError> {
    if policy == MissingNamePolicy::Skip {
        return Ok(frontend_groups(root));
    }

    let mut names = Vec::new();
    let mut missing = None;
    for_each_group(root, |container, position, group| {
        if missing.is_some() {
            return;
        }
        match group.attribute(NAME_ATTR) {
            Some(name) => names.push(name.to_string()),
            None => missing = Some((container, position)),
        }
    });

    match missing {
        Some((container, position)) => Err(StatusError::MissingGroupName {
            container,
            position,
        }),
        None => Ok(names),
    }
}

/// Shape of a status document, as far as group extraction is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupReport {
    /// Name of the root element.
    pub root: String,
    /// Number of `groups` elements directly under the root.
    pub containers: usize,
    /// Names found, in document order.
    pub names: Vec<String>,
    /// `group` elements without a `name` attribute.
    pub unnamed: usize,
}

/// Summarize `root` without failing on unnamed groups.
pub fn inspect(root: &Element) -> GroupReport {
    let mut names = Vec::new();
    let mut unnamed = 0;
    for_each_group(root, |_, _, group| match group.attribute(NAME_ATTR) {
        Some(name) => names.push(name.to_string()),
        None => unnamed += 1,
    });

    GroupReport {
        root: root.name().to_string(),
        containers: root.child_elements_named(GROUPS_TAG).count(),
        names,
        unnamed,
    }
}

/// Visit every `group` element under every `groups` child of `root`, with
/// the container index and the group's position among that container's
/// `group` elements.
fn for_each_group<'a>(root: &'a Element, mut visit: impl FnMut(usize, usize, &'a Element)) {
    for (container, groups) in root.child_elements_named(GROUPS_TAG).enumerate() {
        for (position, group) in groups.child_elements_named(GROUP_TAG).enumerate() {
            visit(container, position, group);
        }
    }
}

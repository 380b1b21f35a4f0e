//! Manifest metadata derivation: a flat answer set becomes the `meta` section
//! and the optional permission list.
//!
//! Length limits are enforced upstream by question filters, so derivation
//! copies answers verbatim; name and author in the output always equal the
//! input exactly. Operates on collected answers only, no I/O.

use crate::manifest::{ICON_GRAY_PATH, ICON_PATH, Meta, Permission};

pub const DEFAULT_VERSION: &str = "0.1.0.0";
pub const DEFAULT_MINIMUM_OVERWOLF_VERSION: &str = "0.91.145";

/// Longest description the store accepts.
pub const DESCRIPTION_MAX: usize = 179;

/// Longest title the dock button renders.
pub const DOCK_TITLE_MAX: usize = 17;

/// The app-level answer set, already validated and filtered by the prompt
/// schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaAnswers {
    pub name: String,
    pub author: String,
    pub version: String,
    pub description: String,
    pub dock_button_title: String,
    pub minimum_overwolf_version: String,
}

/// Produce the `meta` section from the answer set. The access name starts
/// empty and the icon paths point at the generated placeholder assets.
pub fn derive_meta(answers: &MetaAnswers) -> Meta {
    Meta {
        name: answers.name.clone(),
        author: answers.author.clone(),
        version: answers.version.clone(),
        minimum_overwolf_version: answers.minimum_overwolf_version.clone(),
        access_name: String::new(),
        description: answers.description.clone(),
        dock_button_title: answers.dock_button_title.clone(),
        icon: ICON_PATH.to_string(),
        icon_gray: ICON_GRAY_PATH.to_string(),
        extra: serde_json::Map::new(),
    }
}

/// The permission list as the document stores it: `None` when the user never
/// opened the permission picker, `Some` (possibly empty) when they did.
pub fn derive_permissions(picked: Option<&[String]>) -> Option<Vec<Permission>> {
    picked.map(|labels| {
        labels
            .iter()
            .filter_map(|label| Permission::from_label(label))
            .collect()
    })
}

/// Truncate to at most `max` characters. Used by question filters for the
/// description and dock-button limits.
pub fn truncate(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}

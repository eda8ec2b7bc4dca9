//! Document template.
//!
//! Every run starts from a template holding the settings unrelated to
//! proxies (ports, mode, rule providers, rules). A built-in template is
//! compiled into the binary; a file on disk can replace it.

use std::fs;
use std::path::Path;

use crate::document::error::{DocumentError, DocumentResult};
use crate::document::schema::ClashDocument;

/// Built-in template.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/default.yml");

/// Load the template from `path`, or the built-in one when no path is given.
pub fn load_template(path: Option<&Path>) -> DocumentResult<ClashDocument> {
    match path {
        Some(path) => {
            let data = fs::read_to_string(path).map_err(|source| DocumentError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "Using template from disk");
            Ok(ClashDocument::from_yaml(&data)?)
        }
        None => Ok(ClashDocument::from_yaml(DEFAULT_TEMPLATE)?),
    }
}

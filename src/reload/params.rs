use serde::{Deserialize, Serialize};

use super::{error::ConfigurationError, options::ReloadOptions};

/// The page keys a component restricts its reload to.
///
/// Accepts a single key or an ordered list; a single key is treated as a
/// one-element list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataKeys {
    Single(String),
    Many(Vec<String>),
}

impl DataKeys {
    /// The ordered key sequence, as sent in `only`
    pub fn keys(&self) -> Vec<String> {
        match self {
            DataKeys::Single(key) => vec![key.clone()],
            DataKeys::Many(keys) => keys.clone(),
        }
    }

    /// An empty single key counts as not supplied; an empty list does not
    fn is_supplied(&self) -> bool {
        !matches!(self, DataKeys::Single(key) if key.is_empty())
    }
}

impl From<&str> for DataKeys {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}
impl From<String> for DataKeys {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}
impl From<Vec<String>> for DataKeys {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}
impl From<Vec<&str>> for DataKeys {
    fn from(value: Vec<&str>) -> Self {
        Self::Many(value.into_iter().map(str::to_owned).collect())
    }
}
impl<const N: usize> From<[&str; N]> for DataKeys {
    fn from(value: [&str; N]) -> Self {
        Self::Many(value.into_iter().map(str::to_owned).collect())
    }
}

/// Merge the caller's base options with the keys to restrict the reload to.
///
/// The result starts from a copy of `params` (hooks included); when `data` is
/// supplied its keys replace whatever `only` the caller put in `params`.
///
/// # Errors
///
/// [`ConfigurationError::MissingDataAndParams`] when neither is supplied.
pub fn compute_reload_params(
    data: Option<&DataKeys>,
    params: Option<&ReloadOptions>,
) -> Result<ReloadOptions, ConfigurationError> {
    let data = data.filter(|d| d.is_supplied());
    if data.is_none() && params.is_none() {
        return Err(ConfigurationError::MissingDataAndParams);
    }

    let mut options = params.cloned().unwrap_or_default();
    if let Some(data) = data {
        options.request.only = data.keys();
    }
    Ok(options)
}

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use url::Url;

use crate::component::{self, Component};
use crate::error::{Result, TemplateParseError};

/// URL, some portions of which may be `{name}` placeholders.
///
/// Components are parsed once, at construction, and are never exposed mutably,
/// so they always reproduce [`raw_value`](Self::raw_value) exactly.
/// Equality, ordering and hashing only look at the raw value.
#[derive(Debug, Clone)]
pub struct UrlTemplate {
    raw_value: String,
    components: Vec<Component>,
}

impl UrlTemplate {
    /// Parse template string.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw_value = raw.into();

        match component::parse(&raw_value) {
            Ok(components) => Ok(Self {
                raw_value,
                components,
            }),
            Err(error) => {
                tracing::debug!(template = %raw_value, %error, "rejected url template");
                Err(error)
            }
        }
    }

    /// Same as [`UrlTemplate::new`], discarding the error.
    pub fn from_raw_value(raw: impl Into<String>) -> Option<Self> {
        Self::new(raw)
            .inspect_err(|error| tracing::trace!(%error, "discarded url template parse error"))
            .ok()
    }

    /// Wrap concrete URL into a template with a single constant component.
    ///
    /// Raw value is the normalized serialization of `Url` (so `https://website.com`
    /// becomes `https://website.com/`), with braces left in query or fragment
    /// percent-encoded as `%7B`/`%7D`.
    pub fn from_url(url: &Url) -> Self {
        let raw_value = url.as_str().replace('{', "%7B").replace('}', "%7D");
        let components = vec![Component::Constant(raw_value.clone())];

        Self {
            raw_value,
            components,
        }
    }

    /// Get the exact string this template was created from.
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// Get ordered components of this template.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Get names of variables in order of appearance (repeated names included).
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.components.iter().filter_map(Component::as_variable)
    }

    /// Get concrete URL, if template has no variables and raw value is a valid URL.
    ///
    /// Only absolute URLs are accepted, so relative templates are never concrete.
    pub fn to_url(&self) -> Option<Url> {
        if self.components.iter().any(Component::is_variable) {
            return None;
        }

        Url::parse(&self.raw_value).ok()
    }

    /// Get normalized form of concrete URL, or raw value for everything else.
    ///
    /// Relative URLs are returned unchanged, as [`to_url`](Self::to_url) never accepts them.
    pub fn absolute_string(&self) -> Cow<'_, str> {
        match self.to_url() {
            Some(url) => Cow::Owned(url.into()),
            None => Cow::Borrowed(&self.raw_value),
        }
    }

    /// Take the raw value out of the template.
    pub fn into_raw_value(self) -> String {
        self.raw_value
    }
}

impl PartialEq for UrlTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.raw_value == other.raw_value
    }
}

impl Eq for UrlTemplate {}

impl Hash for UrlTemplate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw_value.hash(state);
    }
}

impl PartialOrd for UrlTemplate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UrlTemplate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw_value.cmp(&other.raw_value)
    }
}

impl Display for UrlTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw_value)
    }
}

impl AsRef<str> for UrlTemplate {
    fn as_ref(&self) -> &str {
        &self.raw_value
    }
}

impl FromStr for UrlTemplate {
    type Err = TemplateParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for UrlTemplate {
    type Error = TemplateParseError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UrlTemplate {
    type Error = TemplateParseError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Url> for UrlTemplate {
    fn from(value: Url) -> Self {
        Self::from_url(&value)
    }
}

impl From<&Url> for UrlTemplate {
    fn from(value: &Url) -> Self {
        Self::from_url(value)
    }
}

impl From<UrlTemplate> for String {
    fn from(value: UrlTemplate) -> Self {
        value.into_raw_value()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UrlTemplate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.raw_value)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UrlTemplate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

//! Strict parser and serializer for URL templates.
//!
//! A URL template is an ordinary URL, some contiguous portions of which are
//! replaced with `{name}` placeholders:
//!
//! ```
//! use urltemplate::{Component, UrlTemplate};
//!
//! let template = UrlTemplate::new("{scheme}://website.com/{path}").unwrap();
//!
//! assert_eq!(
//!     template.components(),
//!     &[
//!         Component::Variable("scheme".to_owned()),
//!         Component::Constant("://website.com/".to_owned()),
//!         Component::Variable("path".to_owned()),
//!     ]
//! );
//! assert_eq!(template.to_url(), None);
//! ```
//!
//! Misplaced braces are rejected with the offending part of the input:
//!
//! ```
//! use urltemplate::{TemplateParseError, UrlTemplate};
//!
//! assert_eq!(
//!     UrlTemplate::new("scheme}://website.com"),
//!     Err(TemplateParseError::UnopenedBrace { prefix: "scheme".to_owned() })
//! );
//! ```
//!
//! ## Features
//!
//! * `serde` (default) - templates (de)serialize as plain strings.
//! * `json` - [`json`] module with encoder escaping `/` as `\/`.

pub mod component;
pub mod error;
pub mod url_template;

#[cfg(feature = "json")]
pub mod json;

pub use component::{parse, reconstruct, Component};
pub use error::{Result, TemplateParseError};
pub use url_template::UrlTemplate;

pub use url;

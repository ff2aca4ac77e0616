//! HTTP method names
//!
//! Method names are normalized to upper case wherever they enter the crate,
//! so `"get"`, `"Get"` and `"GET"` all address the same declarations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An HTTP method, upper-case normalized
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HttpMethod {
	Get,
	Post,
	Put,
	Patch,
	Delete,
	Head,
	Options,
	Trace,
	/// Any other method token, only obtainable through [`HttpMethod::parse`]
	Extension(ExtensionMethod),
}

/// Upper-cased token of a non-standard method
///
/// The field is private so that a standard method name can never end up
/// inside [`HttpMethod::Extension`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtensionMethod(String);

impl ExtensionMethod {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl HttpMethod {
	/// Parse a method name, normalizing case
	///
	/// # Examples
	///
	/// ```
	/// use rest_swagger_introspectors::HttpMethod;
	///
	/// assert_eq!(HttpMethod::parse("patch"), HttpMethod::Patch);
	/// assert_eq!(HttpMethod::parse(" purge ").as_str(), "PURGE");
	/// assert!(matches!(HttpMethod::parse("purge"), HttpMethod::Extension(_)));
	/// ```
	pub fn parse(name: &str) -> Self {
		let upper = name.trim().to_ascii_uppercase();
		match upper.as_str() {
			"GET" => Self::Get,
			"POST" => Self::Post,
			"PUT" => Self::Put,
			"PATCH" => Self::Patch,
			"DELETE" => Self::Delete,
			"HEAD" => Self::Head,
			"OPTIONS" => Self::Options,
			"TRACE" => Self::Trace,
			_ => Self::Extension(ExtensionMethod(upper)),
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Put => "PUT",
			Self::Patch => "PATCH",
			Self::Delete => "DELETE",
			Self::Head => "HEAD",
			Self::Options => "OPTIONS",
			Self::Trace => "TRACE",
			Self::Extension(name) => name.as_str(),
		}
	}

	/// POST, PUT and PATCH carry a request body
	pub fn is_write(&self) -> bool {
		matches!(self, Self::Post | Self::Put | Self::Patch)
	}

	/// Map to the OpenAPI operation slot, if the method has one
	#[cfg(feature = "openapi")]
	pub fn to_openapi(&self) -> Option<utoipa::openapi::HttpMethod> {
		use utoipa::openapi::HttpMethod as OpenApiMethod;

		match self {
			Self::Get => Some(OpenApiMethod::Get),
			Self::Post => Some(OpenApiMethod::Post),
			Self::Put => Some(OpenApiMethod::Put),
			Self::Patch => Some(OpenApiMethod::Patch),
			Self::Delete => Some(OpenApiMethod::Delete),
			Self::Head => Some(OpenApiMethod::Head),
			Self::Options => Some(OpenApiMethod::Options),
			Self::Trace => Some(OpenApiMethod::Trace),
			Self::Extension(_) => None,
		}
	}
}

impl From<&str> for HttpMethod {
	fn from(name: &str) -> Self {
		Self::parse(name)
	}
}

impl From<String> for HttpMethod {
	fn from(name: String) -> Self {
		Self::parse(&name)
	}
}

impl From<HttpMethod> for String {
	fn from(method: HttpMethod) -> Self {
		method.as_str().to_string()
	}
}

impl fmt::Display for HttpMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

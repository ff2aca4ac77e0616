//! Error types
//!
//! Introspection itself never fails. Failures come either from the endpoint
//! handler (returned unmodified as [`HandlerError`]) or from loading
//! configuration ([`IntrospectError`]).

use rest_swagger_parsers::MediaTypeError;
use thiserror::Error;

/// Failure reported by an endpoint handler collaborator
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
	#[error("Failed to resolve view name: {0}")]
	ViewName(String),

	#[error("Failed to resolve view description: {0}")]
	ViewDescription(String),

	#[error("Failed to resolve parsers: {0}")]
	Parsers(String),

	#[error("Handler error: {0}")]
	Other(String),
}

pub type HandlerResult<T> = std::result::Result<T, HandlerError>;

/// Errors raised while loading introspection settings or declarations
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum IntrospectError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid media type {value:?}: {source}")]
	InvalidMediaType {
		value: String,
		#[source]
		source: MediaTypeError,
	},

	#[error("Override {field:?} must be {expected}")]
	InvalidOverride {
		field: String,
		expected: &'static str,
	},

	#[error("Method {method} is declared more than once (as {first:?} and {second:?})")]
	DuplicateMethod {
		method: String,
		first: String,
		second: String,
	},
}

pub type IntrospectResult<T> = std::result::Result<T, IntrospectError>;

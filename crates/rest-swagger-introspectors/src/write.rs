//! Write capability
//!
//! Extra queries for operations that accept a request body. The capability
//! wraps a base [`ViewMethodIntrospector`] and leaves its field resolution
//! untouched.

use crate::error::HandlerResult;
use crate::introspector::{Introspector, ViewMethodIntrospector};
use crate::handler::EndpointHandler;
use crate::method::HttpMethod;
use rest_swagger_parsers::MediaType;
use serde_json::{Map, Value};

/// Queries specific to operations with a request body
pub trait WriteCapable: Introspector {
	/// Whether the handler currently accepts form-encoded or multipart bodies
	fn accepts_form_data(&self) -> HandlerResult<bool>;

	/// Media types the operation consumes: the declared `consumes` list, or
	/// the media types advertised by the handler's current parsers
	fn get_consumes(&self) -> HandlerResult<Vec<String>>;
}

/// Introspector for POST, PUT and PATCH operations
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rest_swagger_introspectors::{ViewHandler, WriteCapable, WriteIntrospector};
/// use rest_swagger_parsers::JSONParser;
///
/// struct FooListCreate;
///
/// let handler = ViewHandler::of::<FooListCreate>();
/// let introspector = WriteIntrospector::new("POST", &handler, "fizz");
/// assert!(introspector.accepts_form_data().unwrap());
///
/// handler.set_parsers(vec![Arc::new(JSONParser::new())]);
/// assert!(!introspector.accepts_form_data().unwrap());
/// ```
#[derive(Debug)]
pub struct WriteIntrospector<'a> {
	base: ViewMethodIntrospector<'a>,
}

impl<'a> WriteIntrospector<'a> {
	pub fn new(
		method: impl Into<HttpMethod>,
		handler: &'a dyn EndpointHandler,
		group_path: impl Into<String>,
	) -> Self {
		Self::from_base(ViewMethodIntrospector::new(method, handler, group_path))
	}

	pub fn from_base(base: ViewMethodIntrospector<'a>) -> Self {
		Self { base }
	}

	pub fn base(&self) -> &ViewMethodIntrospector<'a> {
		&self.base
	}

	pub fn into_base(self) -> ViewMethodIntrospector<'a> {
		self.base
	}

	/// Media types advertised by the handler's parsers, parsed
	fn advertised_media_types(&self) -> HandlerResult<Vec<MediaType>> {
		let parsers = self.base.handler().get_parsers()?;
		let mut media_types = Vec::new();
		for parser in &parsers {
			for value in parser.media_types() {
				match MediaType::parse(&value) {
					Ok(media_type) => media_types.push(media_type),
					Err(error) => {
						tracing::debug!(parser = parser.name(), %value, %error, "skipping unparsable media type");
					}
				}
			}
		}
		Ok(media_types)
	}
}

impl Introspector for WriteIntrospector<'_> {
	fn method(&self) -> &HttpMethod {
		self.base.method()
	}

	fn group_path(&self) -> &str {
		self.base.group_path()
	}

	fn get_tags(&self) -> String {
		self.base.get_tags()
	}

	fn get_summary(&self) -> HandlerResult<String> {
		self.base.get_summary()
	}

	fn get_description(&self) -> HandlerResult<String> {
		self.base.get_description()
	}

	fn get_method_data(&self, method: &str) -> Map<String, Value> {
		self.base.get_method_data(method)
	}

	fn as_write_capable(&self) -> Option<&dyn WriteCapable> {
		Some(self)
	}
}

impl WriteCapable for WriteIntrospector<'_> {
	fn accepts_form_data(&self) -> HandlerResult<bool> {
		let settings = self.base.settings();
		Ok(self
			.advertised_media_types()?
			.iter()
			.any(|media_type| settings.is_form_media_type(media_type)))
	}

	fn get_consumes(&self) -> HandlerResult<Vec<String>> {
		if let Some(consumes) = self.base.overrides().and_then(|o| o.consumes.as_ref()) {
			tracing::debug!(method = %self.method(), "using declared consumes");
			return Ok(consumes.clone());
		}

		let mut consumes: Vec<String> = Vec::new();
		for media_type in self.advertised_media_types()? {
			let essence = media_type.essence();
			if !consumes.contains(&essence) {
				consumes.push(essence);
			}
		}
		Ok(consumes)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::declarations::{MethodOverrides, SwaggerDeclarations};
	use crate::handler::ViewHandler;
	use crate::settings::IntrospectorSettings;
	use rest_swagger_parsers::{FileUploadParser, FormParser, JSONParser, MultiPartParser};
	use rstest::rstest;
	use std::sync::Arc;

	struct UploadView;

	#[rstest]
	fn test_consumes_follows_parser_order_without_duplicates() {
		let handler = ViewHandler::of::<UploadView>().with_parsers(vec![
			Arc::new(MultiPartParser::new()),
			Arc::new(JSONParser::new()),
			Arc::new(MultiPartParser::new()),
		]);
		let introspector = WriteIntrospector::new("PUT", &handler, "uploads");

		assert_eq!(
			introspector.get_consumes().unwrap(),
			vec![
				"multipart/form-data".to_string(),
				"application/json".to_string(),
				"application/*+json".to_string(),
			]
		);
	}

	#[rstest]
	fn test_declared_consumes_wins() {
		let handler = ViewHandler::of::<UploadView>().with_swagger(
			SwaggerDeclarations::new()
				.method("PATCH", MethodOverrides::new().consumes(["application/merge-patch+json"])),
		);
		let introspector = WriteIntrospector::new("patch", &handler, "uploads");

		assert_eq!(
			introspector.get_consumes().unwrap(),
			vec!["application/merge-patch+json".to_string()]
		);
		// declared consumes does not affect the parser-based answer
		assert!(introspector.accepts_form_data().unwrap());
	}

	#[rstest]
	fn test_wildcard_parser_is_not_form_data() {
		let handler =
			ViewHandler::of::<UploadView>().with_parsers(vec![Arc::new(FileUploadParser::new())]);
		let introspector = WriteIntrospector::new("POST", &handler, "uploads");

		assert!(!introspector.accepts_form_data().unwrap());
	}

	#[rstest]
	fn test_form_media_types_come_from_settings() {
		let handler =
			ViewHandler::of::<UploadView>().with_parsers(vec![Arc::new(FormParser::new())]);
		let settings = IntrospectorSettings::default()
			.with_form_media_types(["multipart/form-data"])
			.unwrap();
		let introspector = WriteIntrospector::from_base(
			ViewMethodIntrospector::new("POST", &handler, "uploads").with_settings(&settings),
		);

		assert!(!introspector.accepts_form_data().unwrap());
	}

	#[rstest]
	fn test_base_queries_are_delegated_unchanged() {
		let handler = ViewHandler::of::<UploadView>()
			.with_description("Upload files.")
			.with_swagger(
				SwaggerDeclarations::new().method("POST", MethodOverrides::new().tags("files")),
			);
		let write = WriteIntrospector::new("POST", &handler, "uploads");
		let base = ViewMethodIntrospector::new("POST", &handler, "uploads");

		assert_eq!(write.get_tags(), base.get_tags());
		assert_eq!(write.get_summary(), base.get_summary());
		assert_eq!(write.get_description(), base.get_description());
		assert_eq!(write.get_method_data("POST"), base.get_method_data("POST"));
		assert_eq!(write.into_base().group_path(), "uploads");
	}
}

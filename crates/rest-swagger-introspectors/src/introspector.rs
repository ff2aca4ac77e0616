//! Method introspector
//!
//! Answers documentation queries for one (handler, HTTP method) pair.
//! Each field is resolved independently: a value declared in the handler's
//! [`SwaggerDeclarations`](crate::SwaggerDeclarations) for the method wins,
//! otherwise the handler-derived default is used.

use crate::declarations::MethodOverrides;
use crate::error::HandlerResult;
use crate::handler::EndpointHandler;
use crate::method::HttpMethod;
use crate::settings::IntrospectorSettings;
use crate::write::{WriteCapable, WriteIntrospector};
use serde_json::{Map, Value};
use std::fmt;

/// Documentation queries for a single operation
pub trait Introspector {
	/// The HTTP method being described
	fn method(&self) -> &HttpMethod;

	/// The route grouping path supplied by the caller
	fn group_path(&self) -> &str;

	/// Declared `tags`, or the grouping path
	fn get_tags(&self) -> String;

	/// Declared `summary`, or the handler's view name
	fn get_summary(&self) -> HandlerResult<String>;

	/// Declared `description`, or the handler's view description
	fn get_description(&self) -> HandlerResult<String>;

	/// The full declaration block for `method`, empty when none is declared
	fn get_method_data(&self, method: &str) -> Map<String, Value>;

	/// Write-specific queries, when this introspector supports them
	fn as_write_capable(&self) -> Option<&dyn WriteCapable> {
		None
	}
}

/// Introspector for one (handler, method) pair
///
/// # Example
///
/// ```
/// use rest_swagger_introspectors::{Introspector, ViewHandler, ViewMethodIntrospector};
///
/// struct FooListCreate;
///
/// let handler = ViewHandler::of::<FooListCreate>().with_description("Foo things.");
/// let introspector = ViewMethodIntrospector::new("GET", &handler, "foo");
///
/// assert_eq!(introspector.get_tags(), "foo");
/// assert_eq!(introspector.get_summary().unwrap(), "Foo List Create");
/// assert_eq!(introspector.get_description().unwrap(), "Foo things.");
/// assert!(introspector.get_method_data("GET").is_empty());
/// ```
pub struct ViewMethodIntrospector<'a> {
	method: HttpMethod,
	handler: &'a dyn EndpointHandler,
	group_path: String,
	settings: &'a IntrospectorSettings,
}

impl<'a> ViewMethodIntrospector<'a> {
	/// Create an introspector using the process-wide default settings
	pub fn new(
		method: impl Into<HttpMethod>,
		handler: &'a dyn EndpointHandler,
		group_path: impl Into<String>,
	) -> Self {
		Self {
			method: method.into(),
			handler,
			group_path: group_path.into(),
			settings: IntrospectorSettings::global(),
		}
	}

	pub fn with_settings(mut self, settings: &'a IntrospectorSettings) -> Self {
		self.settings = settings;
		self
	}

	pub fn handler(&self) -> &'a dyn EndpointHandler {
		self.handler
	}

	pub fn settings(&self) -> &'a IntrospectorSettings {
		self.settings
	}

	/// Overrides declared for this introspector's method
	pub fn overrides(&self) -> Option<&'a MethodOverrides> {
		self.handler.swagger()?.get(&self.method)
	}
}

impl Introspector for ViewMethodIntrospector<'_> {
	fn method(&self) -> &HttpMethod {
		&self.method
	}

	fn group_path(&self) -> &str {
		&self.group_path
	}

	fn get_tags(&self) -> String {
		match self.overrides().and_then(|o| o.tags.as_ref()) {
			Some(tags) => {
				tracing::debug!(method = %self.method, %tags, "using declared tags");
				tags.clone()
			}
			None => self.group_path.clone(),
		}
	}

	fn get_summary(&self) -> HandlerResult<String> {
		if let Some(summary) = self.overrides().and_then(|o| o.summary.as_ref()) {
			tracing::debug!(method = %self.method, "using declared summary");
			return Ok(summary.clone());
		}
		tracing::trace!(method = %self.method, "summary falls back to view name");
		self.handler.get_view_name()
	}

	fn get_description(&self) -> HandlerResult<String> {
		if let Some(description) = self.overrides().and_then(|o| o.description.as_ref()) {
			tracing::debug!(method = %self.method, "using declared description");
			return Ok(description.clone());
		}
		tracing::trace!(method = %self.method, "description falls back to view description");
		self.handler.get_view_description()
	}

	fn get_method_data(&self, method: &str) -> Map<String, Value> {
		let method = HttpMethod::parse(method);
		self.handler
			.swagger()
			.and_then(|declarations| declarations.get(&method))
			.map(MethodOverrides::to_map)
			.unwrap_or_default()
	}
}

impl fmt::Debug for ViewMethodIntrospector<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ViewMethodIntrospector")
			.field("method", &self.method)
			.field("group_path", &self.group_path)
			.field("settings", self.settings)
			.finish_non_exhaustive()
	}
}

/// Build the introspector matching `method`'s capabilities
///
/// Methods listed in the settings' `write_methods` get a
/// [`WriteIntrospector`]; everything else gets the base introspector.
///
/// # Example
///
/// ```
/// use rest_swagger_introspectors::{Introspector, ViewHandler, build_introspector};
///
/// struct Accounts;
/// let handler = ViewHandler::of::<Accounts>();
///
/// let post = build_introspector("POST", &handler, "accounts");
/// assert!(post.as_write_capable().is_some());
///
/// let get = build_introspector("GET", &handler, "accounts");
/// assert!(get.as_write_capable().is_none());
/// ```
pub fn build_introspector<'a>(
	method: impl Into<HttpMethod>,
	handler: &'a dyn EndpointHandler,
	group_path: impl Into<String>,
) -> Box<dyn Introspector + 'a> {
	build_introspector_with_settings(method, handler, group_path, IntrospectorSettings::global())
}

pub fn build_introspector_with_settings<'a>(
	method: impl Into<HttpMethod>,
	handler: &'a dyn EndpointHandler,
	group_path: impl Into<String>,
	settings: &'a IntrospectorSettings,
) -> Box<dyn Introspector + 'a> {
	let base = ViewMethodIntrospector::new(method, handler, group_path).with_settings(settings);
	if settings.is_write_method(base.method()) {
		tracing::debug!(method = %base.method(), group_path = base.group_path(), "building write-capable introspector");
		Box::new(WriteIntrospector::from_base(base))
	} else {
		Box::new(base)
	}
}

//! Endpoint handler interface consumed by the introspectors

use crate::declarations::SwaggerDeclarations;
use crate::error::HandlerResult;
use crate::view_name::{derive_view_name, format_view_description};
use parking_lot::RwLock;
use rest_swagger_parsers::{ParserDescriptor, default_parsers};
use std::sync::Arc;

/// An API endpoint handler as seen by documentation tooling
///
/// Every query is made fresh on each call; implementations may change
/// their answers at runtime.
pub trait EndpointHandler: Send + Sync {
	/// Short human-readable title of the view
	fn get_view_name(&self) -> HandlerResult<String>;

	/// Human-readable description of the view
	fn get_view_description(&self) -> HandlerResult<String>;

	/// Request body parsers currently configured on the view
	fn get_parsers(&self) -> HandlerResult<Vec<Arc<dyn ParserDescriptor>>>;

	/// Per-method documentation overrides, if the handler declares any
	fn swagger(&self) -> Option<&SwaggerDeclarations> {
		None
	}
}

/// Registration-time description of a view
///
/// # Example
///
/// ```
/// use rest_swagger_introspectors::{EndpointHandler, MethodOverrides, SwaggerDeclarations, ViewHandler};
///
/// struct AccountListCreate;
///
/// let handler = ViewHandler::of::<AccountListCreate>()
///     .with_description("List or create accounts.")
///     .with_swagger(
///         SwaggerDeclarations::new().method("GET", MethodOverrides::new().tags("accounts")),
///     );
///
/// assert_eq!(handler.get_view_name().unwrap(), "Account List Create");
/// assert!(handler.swagger().is_some());
/// ```
#[derive(Debug)]
pub struct ViewHandler {
	type_name: &'static str,
	name: Option<String>,
	suffix: Option<String>,
	description: String,
	parsers: RwLock<Vec<Arc<dyn ParserDescriptor>>>,
	swagger: Option<SwaggerDeclarations>,
}

impl ViewHandler {
	/// Describe the view implemented by `T`, deriving its name from the type
	pub fn of<T: ?Sized>() -> Self {
		Self::from_type_name(std::any::type_name::<T>())
	}

	pub fn from_type_name(type_name: &'static str) -> Self {
		Self {
			type_name,
			name: None,
			suffix: None,
			description: String::new(),
			parsers: RwLock::new(default_parsers()),
			swagger: None,
		}
	}

	/// Use an explicit name instead of the derived one
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Suffix appended to the derived name, e.g. `List` or `Instance`
	pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
		self.suffix = Some(suffix.into());
		self
	}

	/// Docstring-style description; indentation is cleaned up on read
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	pub fn with_parsers(self, parsers: Vec<Arc<dyn ParserDescriptor>>) -> Self {
		*self.parsers.write() = parsers;
		self
	}

	pub fn with_swagger(mut self, declarations: SwaggerDeclarations) -> Self {
		self.swagger = Some(declarations);
		self
	}

	/// Replace the parser list at runtime
	pub fn set_parsers(&self, parsers: Vec<Arc<dyn ParserDescriptor>>) {
		*self.parsers.write() = parsers;
	}

	pub fn type_name(&self) -> &'static str {
		self.type_name
	}
}

impl EndpointHandler for ViewHandler {
	fn get_view_name(&self) -> HandlerResult<String> {
		Ok(match &self.name {
			Some(name) => name.clone(),
			None => derive_view_name(self.type_name, self.suffix.as_deref()),
		})
	}

	fn get_view_description(&self) -> HandlerResult<String> {
		Ok(format_view_description(&self.description))
	}

	fn get_parsers(&self) -> HandlerResult<Vec<Arc<dyn ParserDescriptor>>> {
		Ok(self.parsers.read().clone())
	}

	fn swagger(&self) -> Option<&SwaggerDeclarations> {
		self.swagger.as_ref()
	}
}

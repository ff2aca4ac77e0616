//! # rest-swagger
//!
//! OpenAPI/Swagger introspection for REST endpoint handlers, inspired by
//! Django REST Swagger.
//!
//! This crate derives documentation metadata for one operation at a time:
//! the tags, summary and description of a (handler, HTTP method) pair, and
//! for write operations whether form data is accepted and which media types
//! are consumed. Developer-declared overrides win field by field over values
//! derived from the handler.
//!
//! ## Feature Flags
//!
//! - `openapi` (default) - Convert [`OperationMetadata`](introspectors::OperationMetadata)
//!   into `utoipa` OpenAPI operation objects
//! - `full` - All features enabled
//!
//! ## Quick Example
//!
//! ```
//! use rest_swagger::prelude::*;
//!
//! struct FooListCreate;
//!
//! let handler = ViewHandler::of::<FooListCreate>()
//!     .with_description("Foos.")
//!     .with_swagger(
//!         SwaggerDeclarations::new().method("POST", MethodOverrides::new().summary("Create a foo")),
//!     );
//!
//! let introspector = build_introspector("POST", &handler, "foo");
//! assert_eq!(introspector.get_summary().unwrap(), "Create a foo");
//! assert_eq!(introspector.get_description().unwrap(), "Foos.");
//!
//! let write = introspector.as_write_capable().unwrap();
//! assert!(write.accepts_form_data().unwrap());
//! ```

pub use rest_swagger_introspectors as introspectors;
pub use rest_swagger_parsers as parsers;

/// Commonly used types
pub mod prelude {
	pub use rest_swagger_introspectors::{
		EndpointHandler, HandlerError, HandlerResult, HttpMethod, IntrospectError,
		IntrospectResult, Introspector, IntrospectorSettings, MethodOverrides, OperationMetadata,
		SwaggerDeclarations, ViewHandler, ViewMethodIntrospector, WriteCapable,
		WriteIntrospector, build_introspector, build_introspector_with_settings,
	};
	pub use rest_swagger_parsers::{
		FileUploadParser, FormParser, JSONParser, MediaType, MultiPartParser, ParserDescriptor,
		default_parsers,
	};
}

//! # rest-swagger introspectors
//!
//! Per-operation introspection of REST endpoint handlers for OpenAPI/Swagger
//! generation.
//!
//! An introspector wraps one (handler, HTTP method, grouping path) triple and
//! answers documentation queries about it. Values declared by the developer
//! for the method win field by field; anything not declared falls back to
//! what the handler itself reports.
//!
//! ## Components
//!
//! - **ViewMethodIntrospector**: tags, summary, description and the raw
//!   declaration block of an operation
//! - **WriteIntrospector**: adds form-data detection and consumed media types
//!   for POST/PUT/PATCH
//! - **build_introspector**: picks the right introspector for a method
//! - **OperationMetadata**: all answers for one operation, serializable and
//!   (with the `openapi` feature) convertible to an OpenAPI operation
//!
//! ## Example
//!
//! ```
//! use rest_swagger_introspectors::{
//!     Introspector, MethodOverrides, SwaggerDeclarations, ViewHandler, ViewMethodIntrospector,
//! };
//!
//! struct AccountList;
//!
//! let handler = ViewHandler::of::<AccountList>()
//!     .with_description("Every account.")
//!     .with_swagger(
//!         SwaggerDeclarations::new().method("GET", MethodOverrides::new().summary("List accounts")),
//!     );
//!
//! let introspector = ViewMethodIntrospector::new("GET", &handler, "accounts");
//! assert_eq!(introspector.get_tags(), "accounts");
//! assert_eq!(introspector.get_summary().unwrap(), "List accounts");
//! assert_eq!(introspector.get_description().unwrap(), "Every account.");
//! ```

pub mod declarations;
pub mod error;
pub mod handler;
pub mod introspector;
pub mod method;
pub mod operation;
pub mod settings;
pub mod view_name;
pub mod write;

pub use declarations::{MethodOverrides, SwaggerDeclarations};
pub use error::{HandlerError, HandlerResult, IntrospectError, IntrospectResult};
pub use handler::{EndpointHandler, ViewHandler};
pub use introspector::{
	Introspector, ViewMethodIntrospector, build_introspector, build_introspector_with_settings,
};
pub use method::{ExtensionMethod, HttpMethod};
pub use operation::OperationMetadata;
pub use settings::IntrospectorSettings;
pub use write::{WriteCapable, WriteIntrospector};

//! # rest-swagger parsers
//!
//! Parser descriptors for request bodies, inspired by Django REST Framework.
//!
//! Parsing itself happens in the web framework. These descriptors only
//! advertise which media types a handler accepts so that documentation
//! tooling can describe request bodies.
//!
//! ## Parsers
//!
//! - **JSONParser**: `application/json` and `application/*+json`
//! - **FormParser**: HTML form data (`application/x-www-form-urlencoded`)
//! - **MultiPartParser**: file uploads (`multipart/form-data`)
//! - **FileUploadParser**: raw uploads of any media type (`*/*`)
//!
//! ## Example
//!
//! ```
//! use rest_swagger_parsers::{FormParser, ParserDescriptor};
//!
//! let parser = FormParser::new();
//! assert!(parser.handles("application/x-www-form-urlencoded; charset=utf-8"));
//! ```

pub mod file;
pub mod form;
pub mod json;
pub mod media_type;
pub mod multipart;
pub mod parser;

pub use file::FileUploadParser;
pub use form::FormParser;
pub use json::JSONParser;
pub use media_type::{MediaType, MediaTypeError};
pub use multipart::MultiPartParser;
pub use parser::{ParserDescriptor, default_parsers};

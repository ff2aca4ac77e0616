use std::fmt::Debug;
use std::sync::Arc;

use crate::form::FormParser;
use crate::json::JSONParser;
use crate::media_type::MediaType;
use crate::multipart::MultiPartParser;

/// Describes a request body parser configured on a handler
///
/// Only the advertised media types matter for documentation purposes.
pub trait ParserDescriptor: Debug + Send + Sync {
	/// Media types this parser accepts, most specific first
	fn media_types(&self) -> Vec<String>;

	/// Short parser name used in diagnostics
	fn name(&self) -> &'static str;

	/// Whether this parser advertises `content_type` (exact essence match,
	/// parameters and case ignored). Malformed input never matches.
	///
	/// # Examples
	///
	/// ```
	/// use rest_swagger_parsers::{JSONParser, ParserDescriptor};
	///
	/// let parser = JSONParser::new();
	/// assert!(parser.handles("application/json; charset=utf-8"));
	/// assert!(!parser.handles("multipart/form-data"));
	/// ```
	fn handles(&self, content_type: &str) -> bool {
		let Ok(wanted) = MediaType::parse(content_type) else {
			return false;
		};
		self.media_types()
			.iter()
			.filter_map(|advertised| MediaType::parse(advertised).ok())
			.any(|advertised| advertised.same_essence(&wanted))
	}
}

/// The framework's default parser list: JSON, form and multipart
///
/// # Examples
///
/// ```
/// use rest_swagger_parsers::default_parsers;
///
/// let names: Vec<_> = default_parsers().iter().map(|p| p.name()).collect();
/// assert_eq!(names, vec!["JSONParser", "FormParser", "MultiPartParser"]);
/// ```
pub fn default_parsers() -> Vec<Arc<dyn ParserDescriptor>> {
	vec![
		Arc::new(JSONParser::new()),
		Arc::new(FormParser::new()),
		Arc::new(MultiPartParser::new()),
	]
}

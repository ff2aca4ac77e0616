use crate::parser::ParserDescriptor;

/// JSON parser for application/json content type
#[derive(Debug, Clone, Default)]
pub struct JSONParser;

impl JSONParser {
	/// Create a new JSONParser descriptor.
	///
	/// # Examples
	///
	/// ```
	/// use rest_swagger_parsers::{JSONParser, ParserDescriptor};
	///
	/// let parser = JSONParser::new();
	/// assert_eq!(parser.media_types()[0], "application/json");
	/// ```
	pub fn new() -> Self {
		Self
	}
}

impl ParserDescriptor for JSONParser {
	fn media_types(&self) -> Vec<String> {
		vec![
			"application/json".to_string(),
			"application/*+json".to_string(),
		]
	}

	fn name(&self) -> &'static str {
		"JSONParser"
	}
}

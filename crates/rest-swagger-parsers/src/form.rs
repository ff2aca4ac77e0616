use crate::parser::ParserDescriptor;

/// Form data parser for application/x-www-form-urlencoded
#[derive(Debug, Clone, Default)]
pub struct FormParser;

impl FormParser {
	pub fn new() -> Self {
		Self
	}
}

impl ParserDescriptor for FormParser {
	fn media_types(&self) -> Vec<String> {
		vec!["application/x-www-form-urlencoded".to_string()]
	}

	fn name(&self) -> &'static str {
		"FormParser"
	}
}

use crate::parser::ParserDescriptor;

/// MultiPart parser for multipart/form-data (file uploads)
#[derive(Debug, Clone, Default)]
pub struct MultiPartParser;

impl MultiPartParser {
	pub fn new() -> Self {
		Self
	}
}

impl ParserDescriptor for MultiPartParser {
	fn media_types(&self) -> Vec<String> {
		vec!["multipart/form-data".to_string()]
	}

	fn name(&self) -> &'static str {
		"MultiPartParser"
	}
}

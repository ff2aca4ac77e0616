use crate::parser::ParserDescriptor;

/// Raw file upload parser
///
/// Accepts any media type and treats the whole body as a single file.
#[derive(Debug, Clone, Default)]
pub struct FileUploadParser;

impl FileUploadParser {
	pub fn new() -> Self {
		Self
	}
}

impl ParserDescriptor for FileUploadParser {
	fn media_types(&self) -> Vec<String> {
		vec!["*/*".to_string()]
	}

	fn name(&self) -> &'static str {
		"FileUploadParser"
	}
}

//! Per-operation metadata collected from an introspector

use crate::error::HandlerResult;
use crate::introspector::Introspector;
use crate::method::HttpMethod;
use serde::Serialize;

/// Everything an introspector knows about one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationMetadata {
	pub method: HttpMethod,
	pub tags: String,
	pub summary: String,
	pub description: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub consumes: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub accepts_form_data: Option<bool>,
}

impl OperationMetadata {
	/// Run every query of `introspector`, including the write-specific ones
	/// when it is write-capable. Handler failures are returned unchanged.
	///
	/// # Example
	///
	/// ```
	/// use rest_swagger_introspectors::{OperationMetadata, ViewHandler, build_introspector};
	///
	/// struct NoteList;
	/// let handler = ViewHandler::of::<NoteList>().with_description("All notes.");
	///
	/// let metadata = OperationMetadata::collect(&*build_introspector("POST", &handler, "notes")).unwrap();
	/// assert_eq!(metadata.summary, "Note List");
	/// assert_eq!(metadata.accepts_form_data, Some(true));
	/// ```
	pub fn collect(introspector: &dyn Introspector) -> HandlerResult<Self> {
		let (consumes, accepts_form_data) = match introspector.as_write_capable() {
			Some(write) => (
				Some(write.get_consumes()?),
				Some(write.accepts_form_data()?),
			),
			None => (None, None),
		};

		Ok(Self {
			method: introspector.method().clone(),
			tags: introspector.get_tags(),
			summary: introspector.get_summary()?,
			description: introspector.get_description()?,
			consumes,
			accepts_form_data,
		})
	}

	/// Convert into an OpenAPI operation object
	///
	/// Each consumed media type becomes a request body content entry with a
	/// generic object schema; bodies are left for the schema generator to
	/// refine.
	#[cfg(feature = "openapi")]
	pub fn into_operation(self) -> utoipa::openapi::path::Operation {
		use utoipa::openapi::content::ContentBuilder;
		use utoipa::openapi::path::OperationBuilder;
		use utoipa::openapi::request_body::RequestBodyBuilder;
		use utoipa::openapi::schema::{ObjectBuilder, Schema, SchemaType, Type};

		let mut builder = OperationBuilder::new()
			.tag(self.tags)
			.summary(Some(self.summary).filter(|s| !s.is_empty()))
			.description(Some(self.description).filter(|d| !d.is_empty()));

		if let Some(consumes) = self.consumes.filter(|c| !c.is_empty()) {
			let mut body = RequestBodyBuilder::new().required(Some(utoipa::openapi::Required::True));
			for media_type in consumes {
				let schema = Schema::Object(
					ObjectBuilder::new()
						.schema_type(SchemaType::Type(Type::Object))
						.build(),
				);
				let content = ContentBuilder::new().schema(Some(schema)).build();
				body = body.content(media_type, content);
			}
			builder = builder.request_body(Some(body.build()));
		}

		builder.build()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::declarations::{MethodOverrides, SwaggerDeclarations};
	use crate::handler::ViewHandler;
	use crate::introspector::{ViewMethodIntrospector, build_introspector};
	use rstest::rstest;
	use serde_json::json;

	struct ArticleDetailView;

	fn handler() -> ViewHandler {
		ViewHandler::of::<ArticleDetailView>()
			.with_description("One article.")
			.with_swagger(
				SwaggerDeclarations::new()
					.method("PUT", MethodOverrides::new().consumes(["application/json"])),
			)
	}

	#[rstest]
	fn test_collect_read_operation() {
		let handler = handler();
		let introspector = ViewMethodIntrospector::new("GET", &handler, "articles");

		let metadata = OperationMetadata::collect(&introspector).unwrap();

		assert_eq!(metadata.method, HttpMethod::Get);
		assert_eq!(metadata.tags, "articles");
		assert_eq!(metadata.summary, "Article Detail");
		assert_eq!(metadata.description, "One article.");
		assert!(metadata.consumes.is_none());
		assert!(metadata.accepts_form_data.is_none());
	}

	#[rstest]
	fn test_collect_write_operation_serializes() {
		let handler = handler();
		let introspector = build_introspector("put", &handler, "articles");

		let metadata = OperationMetadata::collect(introspector.as_ref()).unwrap();

		assert_eq!(
			serde_json::to_value(&metadata).unwrap(),
			json!({
				"method": "PUT",
				"tags": "articles",
				"summary": "Article Detail",
				"description": "One article.",
				"consumes": ["application/json"],
				"accepts_form_data": true,
			})
		);
	}

	#[cfg(feature = "openapi")]
	#[rstest]
	fn test_into_operation() {
		let handler = handler();
		let introspector = build_introspector("PUT", &handler, "articles");

		let operation = OperationMetadata::collect(introspector.as_ref())
			.unwrap()
			.into_operation();

		assert_eq!(operation.tags, Some(vec!["articles".to_string()]));
		assert_eq!(operation.summary.as_deref(), Some("Article Detail"));
		assert_eq!(operation.description.as_deref(), Some("One article."));
		let body = operation.request_body.expect("request body");
		assert!(body.content.contains_key("application/json"));
		assert_eq!(body.content.len(), 1);
	}

	#[cfg(feature = "openapi")]
	#[rstest]
	fn test_into_operation_without_body() {
		let handler = handler();
		let introspector = ViewMethodIntrospector::new("GET", &handler, "articles");

		let operation = OperationMetadata::collect(&introspector)
			.unwrap()
			.into_operation();

		assert!(operation.request_body.is_none());
	}
}

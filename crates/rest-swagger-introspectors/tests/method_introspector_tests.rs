//! Method Introspector Tests
//!
//! Field resolution for a (handler, method) pair, with and without declared
//! overrides.

use rest_swagger_introspectors::{
	EndpointHandler, Introspector, MethodOverrides, SwaggerDeclarations, ViewHandler,
	ViewMethodIntrospector,
};
use rstest::{fixture, rstest};
use serde_json::json;

struct FooListCreate;

struct PathIntrospectorOverridesView;

#[fixture]
fn foo_list_create() -> ViewHandler {
	ViewHandler::of::<FooListCreate>().with_description(
		"Lists foos and creates new ones.\n\n    Results are ordered by name.\n",
	)
}

#[fixture]
fn overrides_view() -> ViewHandler {
	ViewHandler::of::<PathIntrospectorOverridesView>()
		.with_description("Derived description.")
		.with_swagger(SwaggerDeclarations::new().method(
			"GET",
			MethodOverrides::new()
				.tags("mytags")
				.summary("This is my summary")
				.description("This is my description of sorts."),
		))
}

#[rstest]
fn test_get_tags(foo_list_create: ViewHandler) {
	let introspector = ViewMethodIntrospector::new("GET", &foo_list_create, "foo");

	assert_eq!(introspector.get_tags(), "foo");
}

#[rstest]
#[case("foo")]
#[case("api/v1/foo")]
#[case("Foo Bar")]
fn test_get_tags_returns_group_path_verbatim(
	foo_list_create: ViewHandler,
	#[case] group_path: &str,
) {
	for method in ["GET", "POST", "DELETE"] {
		let introspector = ViewMethodIntrospector::new(method, &foo_list_create, group_path);
		assert_eq!(introspector.get_tags(), group_path);
	}
}

#[rstest]
fn test_get_description(foo_list_create: ViewHandler) {
	let introspector = ViewMethodIntrospector::new("GET", &foo_list_create, "foo");

	assert_eq!(
		introspector.get_description().unwrap(),
		foo_list_create.get_view_description().unwrap()
	);
	assert_eq!(
		introspector.get_description().unwrap(),
		"Lists foos and creates new ones.\n\nResults are ordered by name."
	);
}

#[rstest]
fn test_get_summary(foo_list_create: ViewHandler) {
	let introspector = ViewMethodIntrospector::new("GET", &foo_list_create, "foo");

	assert_eq!(
		introspector.get_summary().unwrap(),
		foo_list_create.get_view_name().unwrap()
	);
	assert_eq!(introspector.get_summary().unwrap(), "Foo List Create");
}

#[rstest]
fn test_get_method_data_returns_declared_overrides(overrides_view: ViewHandler) {
	let introspector = ViewMethodIntrospector::new("GET", &overrides_view, "foo");
	let expected = json!({
		"tags": "mytags",
		"summary": "This is my summary",
		"description": "This is my description of sorts.",
	});

	let result = introspector.get_method_data("GET");

	for (key, value) in expected.as_object().unwrap() {
		assert_eq!(result.get(key), Some(value), "missing declared field {key}");
	}
}

#[rstest]
fn test_get_method_data_keeps_extra_fields() {
	let handler = ViewHandler::of::<PathIntrospectorOverridesView>().with_swagger(
		SwaggerDeclarations::new().method(
			"GET",
			MethodOverrides::new()
				.summary("S")
				.extra("deprecated", true)
				.unwrap()
				.extra("operation_id", "list_foo")
				.unwrap(),
		),
	);
	let introspector = ViewMethodIntrospector::new("GET", &handler, "foo");

	let result = introspector.get_method_data("GET");

	assert_eq!(result.len(), 3);
	assert_eq!(result["deprecated"], json!(true));
	assert_eq!(result["operation_id"], json!("list_foo"));
}

#[rstest]
fn test_fields_declared_by_name_drive_the_getters() {
	let handler = ViewHandler::of::<PathIntrospectorOverridesView>().with_swagger(
		SwaggerDeclarations::new().method(
			"GET",
			MethodOverrides::new()
				.extra("summary", "Declared")
				.unwrap()
				.extra("tags", "mytags")
				.unwrap(),
		),
	);
	let introspector = ViewMethodIntrospector::new("GET", &handler, "foo");

	let data = introspector.get_method_data("GET");

	assert_eq!(data["summary"], json!("Declared"));
	assert_eq!(data["tags"], json!("mytags"));
	assert_eq!(introspector.get_summary().unwrap(), "Declared");
	assert_eq!(introspector.get_tags(), "mytags");
}

#[rstest]
fn test_get_method_data_for_undeclared_method_is_empty(overrides_view: ViewHandler) {
	let introspector = ViewMethodIntrospector::new("GET", &overrides_view, "foo");

	assert!(introspector.get_method_data("PATCH").is_empty());
}

#[rstest]
fn test_get_method_data_without_declarations_is_empty(foo_list_create: ViewHandler) {
	let introspector = ViewMethodIntrospector::new("GET", &foo_list_create, "foo");

	assert!(introspector.get_method_data("GET").is_empty());
}

#[rstest]
fn test_overrides_take_precedence(overrides_view: ViewHandler) {
	let introspector = ViewMethodIntrospector::new("GET", &overrides_view, "foo");

	assert_eq!(introspector.get_tags(), "mytags");
	assert_eq!(introspector.get_summary().unwrap(), "This is my summary");
	assert_eq!(
		introspector.get_description().unwrap(),
		"This is my description of sorts."
	);
}

#[rstest]
fn test_overrides_are_scoped_to_their_method(overrides_view: ViewHandler) {
	let introspector = ViewMethodIntrospector::new("POST", &overrides_view, "foo");

	assert_eq!(introspector.get_tags(), "foo");
	assert_eq!(
		introspector.get_summary().unwrap(),
		"Path Introspector Overrides"
	);
	assert_eq!(introspector.get_description().unwrap(), "Derived description.");
}

#[rstest]
#[case("get")]
#[case("Get")]
#[case("GET")]
fn test_method_case_is_normalized(overrides_view: ViewHandler, #[case] method: &str) {
	let introspector = ViewMethodIntrospector::new(method, &overrides_view, "foo");

	assert_eq!(introspector.get_tags(), "mytags");
	assert_eq!(introspector.get_method_data(method)["tags"], json!("mytags"));
}

#[rstest]
fn test_declarations_loaded_from_toml() {
	let declarations = SwaggerDeclarations::from_toml_str(
		r#"
[GET]
tags = "mytags"
summary = "This is my summary"
"#,
	)
	.unwrap();
	let handler = ViewHandler::of::<PathIntrospectorOverridesView>()
		.with_description("Derived description.")
		.with_swagger(declarations);
	let introspector = ViewMethodIntrospector::new("GET", &handler, "foo");

	assert_eq!(introspector.get_tags(), "mytags");
	assert_eq!(introspector.get_summary().unwrap(), "This is my summary");
	assert_eq!(introspector.get_description().unwrap(), "Derived description.");
}

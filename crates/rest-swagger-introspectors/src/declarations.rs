//! Developer-declared documentation overrides
//!
//! A handler may declare, per HTTP method, values that take precedence over
//! the metadata the framework derives on its own. Declarations are plain
//! data, built in code or deserialized from configuration at registration
//! time.
//!
//! ```toml
//! [GET]
//! tags = "accounts"
//! summary = "List accounts"
//!
//! [post]
//! description = "Create an account."
//! consumes = ["application/json"]
//! deprecated = true
//! ```

use crate::error::{IntrospectError, IntrospectResult};
use crate::method::HttpMethod;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Overrides declared for a single HTTP method
///
/// Every field is optional. Unknown fields are kept aside so the full
/// declaration block can be handed to later generation stages. The extra
/// fields never hold a known field name, so [`MethodOverrides::to_map`]
/// always agrees with the typed fields the introspector reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodOverrides {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tags: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub summary: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub consumes: Option<Vec<String>>,
	#[serde(flatten)]
	extra: Map<String, Value>,
}

impl MethodOverrides {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn tags(mut self, tags: impl Into<String>) -> Self {
		self.tags = Some(tags.into());
		self
	}

	pub fn summary(mut self, summary: impl Into<String>) -> Self {
		self.summary = Some(summary.into());
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn consumes<I, S>(mut self, media_types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.consumes = Some(media_types.into_iter().map(Into::into).collect());
		self
	}

	/// Declare a field by name
	///
	/// `tags`, `summary` and `description` take a string and `consumes` an
	/// array of strings; they are stored in the typed fields. Any other name
	/// is kept as an extra field.
	///
	/// # Examples
	///
	/// ```
	/// use rest_swagger_introspectors::MethodOverrides;
	///
	/// let overrides = MethodOverrides::new()
	///     .extra("summary", "Declared")
	///     .unwrap()
	///     .extra("deprecated", true)
	///     .unwrap();
	///
	/// assert_eq!(overrides.summary.as_deref(), Some("Declared"));
	/// assert!(overrides.extra_fields().contains_key("deprecated"));
	/// assert!(MethodOverrides::new().extra("tags", 3).is_err());
	/// ```
	pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> IntrospectResult<Self> {
		let key = key.into();
		let value = value.into();
		match key.as_str() {
			"tags" => self.tags = Some(expect_string(&key, value)?),
			"summary" => self.summary = Some(expect_string(&key, value)?),
			"description" => self.description = Some(expect_string(&key, value)?),
			"consumes" => self.consumes = Some(expect_string_list(&key, value)?),
			_ => {
				self.extra.insert(key, value);
			}
		}
		Ok(self)
	}

	/// Declared fields not known to this crate
	pub fn extra_fields(&self) -> &Map<String, Value> {
		&self.extra
	}

	/// Flatten the declaration into a field map
	///
	/// # Examples
	///
	/// ```
	/// use rest_swagger_introspectors::MethodOverrides;
	/// use serde_json::json;
	///
	/// let data = MethodOverrides::new()
	///     .summary("S")
	///     .extra("deprecated", true)
	///     .unwrap()
	///     .to_map();
	///
	/// assert_eq!(data.get("summary"), Some(&json!("S")));
	/// assert_eq!(data.get("deprecated"), Some(&json!(true)));
	/// assert!(!data.contains_key("tags"));
	/// ```
	pub fn to_map(&self) -> Map<String, Value> {
		let mut data = self.extra.clone();
		if let Some(tags) = &self.tags {
			data.insert("tags".to_string(), Value::String(tags.clone()));
		}
		if let Some(summary) = &self.summary {
			data.insert("summary".to_string(), Value::String(summary.clone()));
		}
		if let Some(description) = &self.description {
			data.insert(
				"description".to_string(),
				Value::String(description.clone()),
			);
		}
		if let Some(consumes) = &self.consumes {
			data.insert(
				"consumes".to_string(),
				Value::Array(consumes.iter().cloned().map(Value::String).collect()),
			);
		}
		data
	}

	pub fn is_empty(&self) -> bool {
		self.tags.is_none()
			&& self.summary.is_none()
			&& self.description.is_none()
			&& self.consumes.is_none()
			&& self.extra.is_empty()
	}
}

fn expect_string(field: &str, value: Value) -> IntrospectResult<String> {
	match value {
		Value::String(text) => Ok(text),
		_ => Err(IntrospectError::InvalidOverride {
			field: field.to_string(),
			expected: "a string",
		}),
	}
}

fn expect_string_list(field: &str, value: Value) -> IntrospectResult<Vec<String>> {
	let invalid = || IntrospectError::InvalidOverride {
		field: field.to_string(),
		expected: "an array of strings",
	};
	let Value::Array(items) = value else {
		return Err(invalid());
	};
	items
		.into_iter()
		.map(|item| match item {
			Value::String(text) => Ok(text),
			_ => Err(invalid()),
		})
		.collect()
}

/// Declarations keyed by the method name exactly as written
type RawDeclarations = BTreeMap<String, MethodOverrides>;

/// Per-method override declarations for one handler
///
/// Method keys are case-insensitive. A document that spells the same method
/// twice (`[get]` and `[GET]`) is rejected rather than merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDeclarations", into = "RawDeclarations")]
pub struct SwaggerDeclarations {
	methods: BTreeMap<HttpMethod, MethodOverrides>,
}

impl SwaggerDeclarations {
	pub fn new() -> Self {
		Self::default()
	}

	/// Declare overrides for a method. A later declaration for the same
	/// method replaces the earlier one.
	///
	/// # Examples
	///
	/// ```
	/// use rest_swagger_introspectors::{HttpMethod, MethodOverrides, SwaggerDeclarations};
	///
	/// let declarations = SwaggerDeclarations::new()
	///     .method("get", MethodOverrides::new().summary("List widgets"));
	///
	/// assert!(declarations.get(&HttpMethod::Get).is_some());
	/// assert!(declarations.get(&HttpMethod::Post).is_none());
	/// ```
	pub fn method(mut self, method: impl Into<HttpMethod>, overrides: MethodOverrides) -> Self {
		self.insert(method, overrides);
		self
	}

	pub fn insert(&mut self, method: impl Into<HttpMethod>, overrides: MethodOverrides) {
		self.methods.insert(method.into(), overrides);
	}

	pub fn get(&self, method: &HttpMethod) -> Option<&MethodOverrides> {
		self.methods.get(method)
	}

	pub fn methods(&self) -> impl Iterator<Item = &HttpMethod> {
		self.methods.keys()
	}

	pub fn is_empty(&self) -> bool {
		self.methods.is_empty()
	}

	/// Load declarations from a TOML document with one table per method
	///
	/// Fails with [`IntrospectError::DuplicateMethod`] when two tables name
	/// the same method in different case.
	pub fn from_toml_str(source: &str) -> IntrospectResult<Self> {
		let raw: RawDeclarations = toml::from_str(source)?;
		Self::try_from(raw)
	}
}

impl TryFrom<RawDeclarations> for SwaggerDeclarations {
	type Error = IntrospectError;

	fn try_from(raw: RawDeclarations) -> IntrospectResult<Self> {
		let mut spelled: BTreeMap<HttpMethod, String> = BTreeMap::new();
		let mut methods = BTreeMap::new();
		for (name, overrides) in raw {
			let method = HttpMethod::parse(&name);
			if let Some(first) = spelled.get(&method) {
				return Err(IntrospectError::DuplicateMethod {
					method: method.to_string(),
					first: first.clone(),
					second: name,
				});
			}
			spelled.insert(method.clone(), name);
			methods.insert(method, overrides);
		}
		Ok(Self { methods })
	}
}

impl From<SwaggerDeclarations> for RawDeclarations {
	fn from(declarations: SwaggerDeclarations) -> Self {
		declarations
			.methods
			.into_iter()
			.map(|(method, overrides)| (method.to_string(), overrides))
			.collect()
	}
}

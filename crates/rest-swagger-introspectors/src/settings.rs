//! Introspection settings
//!
//! Settings are loaded from TOML. Missing keys fall back to the defaults.
//!
//! ```toml
//! form_media_types = ["application/x-www-form-urlencoded", "multipart/form-data"]
//! write_methods = ["POST", "PUT", "PATCH"]
//! ```

use crate::error::{IntrospectError, IntrospectResult};
use crate::method::HttpMethod;
use rest_swagger_parsers::MediaType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

static DEFAULT_SETTINGS: LazyLock<IntrospectorSettings> =
	LazyLock::new(IntrospectorSettings::default);

/// Settings shared by all introspectors of one generation pass
///
/// Form media types are parsed once, when the settings are built, so an
/// invalid entry is an error at load time and never silently ignored.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SettingsFile", into = "SettingsFile")]
pub struct IntrospectorSettings {
	form_media_types: Vec<MediaType>,
	/// Methods that get the write-capable introspector
	pub write_methods: Vec<HttpMethod>,
}

/// On-disk form of [`IntrospectorSettings`]
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct SettingsFile {
	form_media_types: Vec<String>,
	write_methods: Vec<HttpMethod>,
}

impl Default for SettingsFile {
	fn default() -> Self {
		IntrospectorSettings::default().into()
	}
}

impl TryFrom<SettingsFile> for IntrospectorSettings {
	type Error = IntrospectError;

	fn try_from(file: SettingsFile) -> IntrospectResult<Self> {
		Ok(Self {
			form_media_types: parse_media_types(file.form_media_types)?,
			write_methods: file.write_methods,
		})
	}
}

impl From<IntrospectorSettings> for SettingsFile {
	fn from(settings: IntrospectorSettings) -> Self {
		Self {
			form_media_types: settings
				.form_media_types
				.iter()
				.map(ToString::to_string)
				.collect(),
			write_methods: settings.write_methods,
		}
	}
}

fn parse_media_types<I, S>(values: I) -> IntrospectResult<Vec<MediaType>>
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	values
		.into_iter()
		.map(|value| {
			let value = value.into();
			MediaType::parse(&value)
				.map_err(|source| IntrospectError::InvalidMediaType { value, source })
		})
		.collect()
}

impl Default for IntrospectorSettings {
	fn default() -> Self {
		Self {
			form_media_types: vec![
				MediaType::new("application", "x-www-form-urlencoded"),
				MediaType::new("multipart", "form-data"),
			],
			write_methods: vec![HttpMethod::Post, HttpMethod::Put, HttpMethod::Patch],
		}
	}
}

impl IntrospectorSettings {
	/// Process-wide default settings
	pub fn global() -> &'static IntrospectorSettings {
		&DEFAULT_SETTINGS
	}

	/// Replace the form media types, failing on the first one that does not
	/// parse
	pub fn with_form_media_types<I, S>(mut self, media_types: I) -> IntrospectResult<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.form_media_types = parse_media_types(media_types)?;
		Ok(self)
	}

	pub fn with_write_methods<I, M>(mut self, methods: I) -> Self
	where
		I: IntoIterator<Item = M>,
		M: Into<HttpMethod>,
	{
		self.write_methods = methods.into_iter().map(Into::into).collect();
		self
	}

	/// Media types that count as form submissions
	pub fn form_media_types(&self) -> &[MediaType] {
		&self.form_media_types
	}

	/// Parse settings from a TOML document
	///
	/// # Examples
	///
	/// ```
	/// use rest_swagger_introspectors::{HttpMethod, IntrospectorSettings};
	///
	/// let settings = IntrospectorSettings::from_toml_str("write_methods = [\"post\"]").unwrap();
	/// assert_eq!(settings.write_methods, vec![HttpMethod::Post]);
	/// assert_eq!(settings.form_media_types().len(), 2);
	/// ```
	pub fn from_toml_str(source: &str) -> IntrospectResult<Self> {
		let file: SettingsFile = toml::from_str(source)?;
		Self::try_from(file)
	}

	/// Read settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> IntrospectResult<Self> {
		let path = path.as_ref();
		tracing::debug!(path = %path.display(), "loading introspector settings");
		let source = fs::read_to_string(path)?;
		Self::from_toml_str(&source)
	}

	/// Whether `method` gets the write-capable introspector
	pub fn is_write_method(&self, method: &HttpMethod) -> bool {
		self.write_methods.contains(method)
	}

	/// Whether `media_type` is one of the configured form media types
	///
	/// Essences are compared exactly; wildcards never count.
	pub fn is_form_media_type(&self, media_type: &MediaType) -> bool {
		!media_type.is_wildcard()
			&& self
				.form_media_types
				.iter()
				.any(|configured| configured.same_essence(media_type))
	}
}

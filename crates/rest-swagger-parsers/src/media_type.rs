//! Media type parsing and matching

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error raised when a media type string is malformed
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaTypeError {
	#[error("Empty media type")]
	Empty,

	#[error("Media type is missing a subtype: {0}")]
	MissingSubtype(String),

	#[error("Invalid media type parameter in {0}")]
	InvalidParameter(String),
}

/// A parsed media type such as `multipart/form-data; boundary=xyz`
///
/// Type, subtype and parameter names are stored lower-cased. Parameter
/// values keep their original case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
	main_type: String,
	sub_type: String,
	parameters: Vec<(String, String)>,
}

impl MediaType {
	/// Build a media type without parameters
	///
	/// ```
	/// use rest_swagger_parsers::MediaType;
	///
	/// let media_type = MediaType::new("Multipart", "form-data");
	/// assert_eq!(media_type, MediaType::parse("multipart/form-data").unwrap());
	/// ```
	pub fn new(main_type: &str, sub_type: &str) -> Self {
		Self {
			main_type: main_type.trim().to_ascii_lowercase(),
			sub_type: sub_type.trim().to_ascii_lowercase(),
			parameters: Vec::new(),
		}
	}

	/// Parse a media type string
	///
	/// # Examples
	///
	/// ```
	/// use rest_swagger_parsers::MediaType;
	///
	/// let media_type = MediaType::parse("Multipart/Form-Data; boundary=abc").unwrap();
	/// assert_eq!(media_type.essence(), "multipart/form-data");
	/// assert_eq!(media_type.parameter("boundary"), Some("abc"));
	/// ```
	pub fn parse(value: &str) -> Result<Self, MediaTypeError> {
		let mut segments = value.split(';');
		let essence = segments.next().map(str::trim).unwrap_or_default();
		if essence.is_empty() {
			return Err(MediaTypeError::Empty);
		}

		let (main_type, sub_type) = match essence.split_once('/') {
			Some((main, sub)) if !main.trim().is_empty() && !sub.trim().is_empty() => {
				(main.trim().to_ascii_lowercase(), sub.trim().to_ascii_lowercase())
			}
			_ => return Err(MediaTypeError::MissingSubtype(value.to_string())),
		};

		let mut parameters = Vec::new();
		for segment in segments {
			let segment = segment.trim();
			if segment.is_empty() {
				continue;
			}
			let (name, raw) = segment
				.split_once('=')
				.ok_or_else(|| MediaTypeError::InvalidParameter(value.to_string()))?;
			let name = name.trim();
			if name.is_empty() {
				return Err(MediaTypeError::InvalidParameter(value.to_string()));
			}
			parameters.push((
				name.to_ascii_lowercase(),
				raw.trim().trim_matches('"').to_string(),
			));
		}

		Ok(Self {
			main_type,
			sub_type,
			parameters,
		})
	}

	/// The top-level type, e.g. `application`
	pub fn main_type(&self) -> &str {
		&self.main_type
	}

	/// The subtype, e.g. `json`
	pub fn sub_type(&self) -> &str {
		&self.sub_type
	}

	/// `type/subtype` without parameters
	pub fn essence(&self) -> String {
		format!("{}/{}", self.main_type, self.sub_type)
	}

	pub fn parameters(&self) -> &[(String, String)] {
		&self.parameters
	}

	/// Look up a parameter by (case-insensitive) name
	pub fn parameter(&self, name: &str) -> Option<&str> {
		self.parameters
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}

	/// Whether either part is a `*` wildcard
	pub fn is_wildcard(&self) -> bool {
		self.main_type == "*" || self.sub_type == "*"
	}

	/// Whether the two media types overlap, honoring `*/*` and `type/*` on
	/// either side. Parameters are ignored.
	///
	/// # Examples
	///
	/// ```
	/// use rest_swagger_parsers::MediaType;
	///
	/// let any = MediaType::parse("*/*").unwrap();
	/// let form = MediaType::parse("multipart/form-data").unwrap();
	/// assert!(any.matches(&form));
	/// assert!(form.matches(&any));
	/// ```
	pub fn matches(&self, other: &MediaType) -> bool {
		let main_matches =
			self.main_type == "*" || other.main_type == "*" || self.main_type == other.main_type;
		let sub_matches =
			self.sub_type == "*" || other.sub_type == "*" || self.sub_type == other.sub_type;
		main_matches && sub_matches
	}

	/// Exact essence comparison, no wildcard expansion
	pub fn same_essence(&self, other: &MediaType) -> bool {
		self.main_type == other.main_type && self.sub_type == other.sub_type
	}
}

impl FromStr for MediaType {
	type Err = MediaTypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for MediaType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.main_type, self.sub_type)?;
		for (name, value) in &self.parameters {
			write!(f, "; {}={}", name, value)?;
		}
		Ok(())
	}
}

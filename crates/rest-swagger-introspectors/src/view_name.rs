//! Derived view names and descriptions
//!
//! Fallback presentation text used when a handler has no explicit name,
//! following the Django REST Framework conventions.

/// Stripped one after the other, so `FooViewSetView` loses both
const VIEW_SUFFIXES: [&str; 2] = ["View", "ViewSet"];

/// Derive a human-readable view name from a Rust type name
///
/// # Examples
///
/// ```
/// use rest_swagger_introspectors::view_name::derive_view_name;
///
/// assert_eq!(derive_view_name("app::views::FooListCreate", None), "Foo List Create");
/// assert_eq!(derive_view_name("AccountViewSet", Some("List")), "Account List");
/// assert_eq!(derive_view_name("HTMLPageView", None), "HTML Page");
/// ```
pub fn derive_view_name(type_name: &str, suffix: Option<&str>) -> String {
	let without_generics = type_name.split('<').next().unwrap_or(type_name);
	let base = without_generics
		.rsplit("::")
		.next()
		.unwrap_or(without_generics)
		.trim();

	let stripped = VIEW_SUFFIXES.iter().fold(base, |name, view_suffix| {
		name.strip_suffix(view_suffix)
			.filter(|rest| !rest.is_empty())
			.unwrap_or(name)
	});

	let mut name = camel_case_to_words(stripped);
	if let Some(suffix) = suffix.map(str::trim).filter(|s| !s.is_empty()) {
		if !name.is_empty() {
			name.push(' ');
		}
		name.push_str(suffix);
	}
	name
}

/// Split `CamelCase` into space separated words, keeping acronyms together
///
/// A word starts at an uppercase letter that follows a lowercase one, or at
/// an uppercase letter followed by a lowercase one. Digits never start a
/// word, so `V2API` stays whole.
fn camel_case_to_words(value: &str) -> String {
	let chars: Vec<char> = value.chars().collect();
	let mut words = String::with_capacity(value.len() + 4);

	for (index, current) in chars.iter().enumerate() {
		if index > 0 && current.is_uppercase() {
			let previous = chars[index - 1];
			let next_is_lower = chars.get(index + 1).is_some_and(|c| c.is_lowercase());
			if previous.is_lowercase() || next_is_lower {
				words.push(' ');
			}
		}
		words.push(*current);
	}

	words
}

/// Clean up docstring-style description text
///
/// The first line is trimmed on its own; the common indentation of the
/// remaining non-blank lines is removed. Leading and trailing blank lines
/// are dropped.
///
/// # Examples
///
/// ```
/// use rest_swagger_introspectors::view_name::format_view_description;
///
/// let text = "List all widgets.\n\n    Supports paging.\n      Indented.\n";
/// assert_eq!(
///     format_view_description(text),
///     "List all widgets.\n\nSupports paging.\n  Indented."
/// );
/// ```
pub fn format_view_description(text: &str) -> String {
	let mut lines = text.lines();
	let first = lines.next().map(str::trim).unwrap_or_default();
	let rest: Vec<&str> = lines.collect();

	let indent = rest
		.iter()
		.filter(|line| !line.trim().is_empty())
		.map(|line| line.len() - line.trim_start().len())
		.min()
		.unwrap_or(0);

	let mut cleaned = Vec::with_capacity(rest.len() + 1);
	cleaned.push(first.to_string());
	for line in rest {
		if line.trim().is_empty() {
			cleaned.push(String::new());
		} else {
			let dedented = line.get(indent..).unwrap_or_else(|| line.trim_start());
			cleaned.push(dedented.trim_end().to_string());
		}
	}

	cleaned.join("\n").trim_matches('\n').to_string()
}

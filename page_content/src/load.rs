use std::path::{Path, PathBuf};

use crate::PageContent;

#[derive(thiserror::Error, Debug)]
pub enum ContentError {
	#[error("Couldn't read content file {}: {source}", path.display())]
	Io {
		path: PathBuf,
		source: std::io::Error
	},
	#[error("Content file isn't a valid page definition: {0}")]
	Parse(#[from] serde_json::Error)
}

impl PageContent {
	pub fn from_json(json: &str) -> Result<Self, ContentError> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn from_path(path: &Path) -> Result<Self, ContentError> {
		let json = std::fs::read_to_string(path)
			.map_err(|source| ContentError::Io { path: path.to_path_buf(), source })?;

		Self::from_json(&json)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::HOME_PAGE;

	#[test]
	fn minimal_definition_has_empty_sections() {
		let site = serde_json::to_string(&HOME_PAGE.site).unwrap();
		let content = PageContent::from_json(&format!(r#"{{ "site": {site} }}"#)).unwrap();

		assert_eq!(content.site, HOME_PAGE.site);
		assert!(content.faqs.is_empty());
		assert!(content.categories.is_empty());
		assert!(content.hero.actions.is_empty());
	}

	#[test]
	fn faqs_keep_their_order() {
		let site = serde_json::to_string(&HOME_PAGE.site).unwrap();
		let content = PageContent::from_json(&format!(r#"{{
			"site": {site},
			"faqs": [
				{{ "question": "Second?", "answer": "b" }},
				{{ "question": "First?", "answer": "a" }}
			]
		}}"#)).unwrap();

		let questions = content.faqs.iter().map(|f| &*f.question).collect::<Vec<_>>();
		assert_eq!(questions, ["Second?", "First?"]);
	}

	#[test]
	fn missing_site_is_a_parse_error() {
		assert!(matches!(PageContent::from_json(r#"{ "faqs": [] }"#), Err(ContentError::Parse(_))));
	}

	#[test]
	fn missing_file_is_an_io_error() {
		let err = PageContent::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
		assert!(matches!(err, ContentError::Io { .. }));
		assert!(err.to_string().contains("/definitely/not/here.json"));
	}
}

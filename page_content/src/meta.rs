use crate::SiteInfo;

/// A single entry for the page's `<head>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaTag<'a> {
	Title(&'a str),
	Name { name: &'static str, content: &'a str },
	Property { property: &'static str, content: &'a str }
}

impl<'a> MetaTag<'a> {
	#[must_use]
	pub fn content(&self) -> &'a str {
		match *self {
			Self::Title(title) => title,
			Self::Name { content, .. } | Self::Property { content, .. } => content
		}
	}
}

#[must_use]
pub fn meta_tags(site: &SiteInfo) -> Vec<MetaTag<'_>> {
	use MetaTag::{Name, Property, Title};

	vec![
		Title(&site.title),
		Name { name: "description", content: &site.description },
		Name { name: "keywords", content: &site.keywords },
		Name { name: "robots", content: &site.robots },
		Property { property: "og:title", content: &site.title },
		Property { property: "og:description", content: &site.description },
		Property { property: "og:type", content: "website" },
		Property { property: "og:url", content: &site.url },
		Property { property: "og:image", content: &site.og_image },
		Name { name: "twitter:card", content: "summary_large_image" },
		Name { name: "twitter:title", content: &site.title },
		Name { name: "twitter:description", content: &site.description },
		Name { name: "theme-color", content: &site.theme_color },
	]
}

use axum::{
	extract::State,
	http::header,
	response::IntoResponse
};
use page_content::{absolute_url, is_site_path, PageContent};
use sitewriter::{ChangeFreq, UrlEntry};
use tracing::warn;

use crate::AppState;

/// Every distinct site path the page links to, starting with the page itself.
pub fn linked_paths(content: &PageContent) -> Vec<&str> {
	let cards = content.categories.iter()
		.chain(content.features.iter())
		.map(|c| &*c.href);

	let links = content.hero.actions.iter()
		.chain(content.hub_links.iter())
		.chain(content.category_hubs.iter())
		.chain(content.content_hubs.iter())
		.map(|l| &*l.href);

	let mut paths = vec!["/"];
	for href in cards.chain(links).filter(|href| is_site_path(href)) {
		if !paths.contains(&href) {
			paths.push(href);
		}
	}

	paths
}

pub fn sitemap_xml(content: &PageContent) -> String {
	let urls = linked_paths(content)
		.into_iter()
		.filter_map(|path| {
			let url = absolute_url(&content.site.url, path);
			match url.parse() {
				Ok(loc) => Some(UrlEntry {
					loc,
					lastmod: None,
					changefreq: Some(ChangeFreq::Weekly),
					priority: (path == "/").then_some(1.0)
				}),
				Err(e) => {
					warn!("Leaving {url} out of sitemap.xml: {e:?}");
					None
				}
			}
		})
		.collect::<Vec<_>>();

	sitewriter::generate_str(&urls)
}

pub fn robots_txt(content: &PageContent) -> String {
	format!(
		"User-agent: *\nAllow: /\n\nSitemap: {}\n",
		absolute_url(&content.site.url, "/sitemap.xml")
	)
}

pub async fn get_sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
	([(header::CONTENT_TYPE, "application/xml")], sitemap_xml(&state.content))
}

pub async fn get_robots_txt(State(state): State<AppState>) -> impl IntoResponse {
	([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], robots_txt(&state.content))
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use page_content::HOME_PAGE;

	use super::*;

	#[test]
	fn paths_are_distinct() {
		let paths = linked_paths(&HOME_PAGE);

		assert_eq!(paths[0], "/");
		for (idx, path) in paths.iter().enumerate() {
			assert!(!paths[idx + 1..].contains(path), "{path} is listed twice");
		}
		for expected in ["/parks", "/rides", "/zoos", "/rides-by-speed", "/rides-by-height", "/travel-math", "/ride-calculators"] {
			assert!(paths.contains(&expected), "{expected}");
		}
	}

	#[test]
	fn sitemap_uses_absolute_urls() {
		let xml = sitemap_xml(&HOME_PAGE);

		assert!(xml.contains("<loc>https://www.iloverides.com/</loc>"));
		assert!(xml.contains("<loc>https://www.iloverides.com/water-parks</loc>"));
		assert_eq!(xml.matches("<url>").count(), linked_paths(&HOME_PAGE).len());
	}

	#[test]
	fn robots_points_at_sitemap() {
		assert_eq!(
			robots_txt(&HOME_PAGE),
			"User-agent: *\nAllow: /\n\nSitemap: https://www.iloverides.com/sitemap.xml\n"
		);
	}
}

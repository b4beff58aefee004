use serde_json::{json, Value};

use crate::{FaqEntry, PageContent, PageOptions, SiteInfo};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Builds the JSON-LD document for the page. `FAQPage.mainEntity` comes from the same `faqs` slice
/// that the accordion is rendered from, so the two can't drift apart.
#[must_use]
pub fn structured_data(content: &PageContent, options: &PageOptions) -> Value {
	let site = &content.site;

	let mut graph = vec![website(site), organization(site)];

	if options.hub_graph {
		graph.push(collection_page(site, &content.topics));
		graph.push(item_list(content));
	}

	graph.push(faq_page(&content.faqs));

	json!({
		"@context": SCHEMA_CONTEXT,
		"@graph": graph
	})
}

/// Serializes the document so that it can be dropped straight into a
/// `<script type="application/ld+json">` tag.
#[must_use]
pub fn script_body(doc: &Value) -> String {
	// none of these can show up in json outside of a string, so escaping them is always valid
	doc.to_string()
		.replace('<', "\\u003c")
		.replace('>', "\\u003e")
		.replace('&', "\\u0026")
}

#[must_use]
pub fn absolute_url(site_url: &str, href: &str) -> String {
	format!("{}{href}", site_url.trim_end_matches('/'))
}

fn website(site: &SiteInfo) -> Value {
	json!({
		"@type": "WebSite",
		"name": site.name,
		"url": site.url,
		"description": site.website_description,
		"potentialAction": {
			"@type": "SearchAction",
			"target": site.search_target,
			"query-input": "required name=search_term_string"
		}
	})
}

fn organization(site: &SiteInfo) -> Value {
	json!({
		"@type": "Organization",
		"name": site.name,
		"url": site.url,
		"logo": site.logo
	})
}

fn collection_page(site: &SiteInfo, topics: &[std::borrow::Cow<'static, str>]) -> Value {
	let about = topics.iter()
		.map(|name| json!({ "@type": "TouristAttraction", "name": name }))
		.collect::<Vec<_>>();

	json!({
		"@type": "CollectionPage",
		"name": site.collection_name,
		"url": site.url,
		"description": site.collection_description,
		"about": about
	})
}

fn item_list(content: &PageContent) -> Value {
	let items = content.content_hubs.iter()
		.enumerate()
		.map(|(idx, hub)| json!({
			"@type": "ListItem",
			"position": idx + 1,
			"name": hub.label,
			"url": absolute_url(&content.site.url, &hub.href)
		}))
		.collect::<Vec<_>>();

	json!({
		"@type": "ItemList",
		"name": content.site.hub_list_name,
		"itemListElement": items
	})
}

fn faq_page(faqs: &[FaqEntry]) -> Value {
	let questions = faqs.iter()
		.map(|faq| json!({
			"@type": "Question",
			"name": faq.question,
			"acceptedAnswer": {
				"@type": "Answer",
				"text": faq.answer
			}
		}))
		.collect::<Vec<_>>();

	json!({
		"@type": "FAQPage",
		"mainEntity": questions
	})
}

#[cfg(test)]
mod tests {
	use std::borrow::Cow;

	use pretty_assertions::assert_eq;

	use super::*;
	use crate::HOME_PAGE;

	fn graph_types(doc: &Value) -> Vec<&str> {
		doc["@graph"].as_array()
			.map(|nodes| nodes.iter().filter_map(|n| n["@type"].as_str()).collect())
			.unwrap_or_default()
	}

	#[test]
	fn main_entity_mirrors_faqs() {
		let doc = structured_data(&HOME_PAGE, &PageOptions::default());
		let faq_node = doc["@graph"].as_array().unwrap()
			.iter()
			.find(|n| n["@type"] == "FAQPage")
			.unwrap();
		let entities = faq_node["mainEntity"].as_array().unwrap();

		assert_eq!(entities.len(), HOME_PAGE.faqs.len());
		for (entity, faq) in entities.iter().zip(HOME_PAGE.faqs.iter()) {
			assert_eq!(entity["@type"], "Question");
			assert_eq!(entity["name"].as_str(), Some(&*faq.question));
			assert_eq!(entity["acceptedAnswer"]["text"].as_str(), Some(&*faq.answer));
		}
	}

	#[test]
	fn hub_graph_toggles_collection_nodes() {
		let full = structured_data(&HOME_PAGE, &PageOptions::default());
		assert_eq!(graph_types(&full), ["WebSite", "Organization", "CollectionPage", "ItemList", "FAQPage"]);

		let small = structured_data(&HOME_PAGE, &PageOptions { hub_graph: false, ..PageOptions::default() });
		assert_eq!(graph_types(&small), ["WebSite", "Organization", "FAQPage"]);
	}

	#[test]
	fn item_list_is_numbered_from_one() {
		let doc = structured_data(&HOME_PAGE, &PageOptions::default());
		let items = doc["@graph"][3]["itemListElement"].as_array().unwrap();

		assert_eq!(items.len(), 10);
		assert_eq!(items[0]["position"], 1);
		assert_eq!(items[0]["url"], "https://www.iloverides.com/parks");
		assert_eq!(items[9]["position"], 10);
		assert_eq!(items[9]["name"], "Events & Openings");
	}

	#[test]
	fn script_body_parses_back() {
		let doc = structured_data(&HOME_PAGE, &PageOptions::default());
		let body = script_body(&doc);

		assert!(!body.contains('<'));
		assert!(!body.contains('&'));

		let parsed: Value = serde_json::from_str(&body).unwrap();
		assert_eq!(parsed["@context"], SCHEMA_CONTEXT);
		assert!(graph_types(&parsed).contains(&"FAQPage"));
		assert_eq!(parsed, doc);
	}

	#[test]
	fn script_body_cant_close_the_tag() {
		let mut content = HOME_PAGE.clone();
		content.faqs = Cow::Owned(vec![FaqEntry {
			question: "</script><script>alert(1)</script>".into(),
			answer: "fine".into()
		}]);

		let doc = structured_data(&content, &PageOptions::default());
		let body = script_body(&doc);

		assert!(!body.contains("</script"));
		let parsed: Value = serde_json::from_str(&body).unwrap();
		assert_eq!(parsed, doc);
	}

	#[test]
	fn output_is_deterministic() {
		let opts = PageOptions::default();
		assert_eq!(
			script_body(&structured_data(&HOME_PAGE, &opts)),
			script_body(&structured_data(&HOME_PAGE, &opts))
		);
	}

	#[test]
	fn absolute_url_handles_trailing_slash() {
		assert_eq!(absolute_url("https://example.com/", "/maps"), "https://example.com/maps");
		assert_eq!(absolute_url("https://example.com", "/"), "https://example.com/");
	}
}

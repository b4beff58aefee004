use std::collections::HashSet;

use crate::{HubLink, PageContent};

/// Problems with a page definition. None of these stop the page from rendering; a bad link just
/// renders as a bad link and a duplicated question just shows up twice.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentIssue {
	#[error("{section} link {href:?} is not a site path")]
	BadHref {
		section: &'static str,
		href: String
	},
	#[error("FAQ question {0:?} appears more than once")]
	DuplicateQuestion(String),
	#[error("FAQ entry #{index} has an empty question or answer")]
	EmptyFaq {
		index: usize
	},
	#[error("site {0} is empty")]
	EmptySiteField(&'static str)
}

/// Whether `href` looks like `/[a-z0-9-/]*`.
#[must_use]
pub fn is_site_path(href: &str) -> bool {
	href.strip_prefix('/')
		.is_some_and(|rest| rest.bytes().all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'-' | b'/')))
}

impl PageContent {
	#[must_use]
	pub fn issues(&self) -> Vec<ContentIssue> {
		let mut issues = Vec::new();

		for (field, value) in [("title", &self.site.title), ("description", &self.site.description)] {
			if value.trim().is_empty() {
				issues.push(ContentIssue::EmptySiteField(field));
			}
		}

		let card_hrefs = self.categories.iter()
			.map(|c| ("category", &*c.href))
			.chain(self.features.iter().map(|c| ("feature", &*c.href)));

		let link_hrefs = links("hero", &self.hero.actions)
			.chain(links("hub", &self.hub_links))
			.chain(links("category hub", &self.category_hubs))
			.chain(links("content hub", &self.content_hubs));

		issues.extend(
			card_hrefs.chain(link_hrefs)
				.filter(|(_, href)| !is_site_path(href))
				.map(|(section, href)| ContentIssue::BadHref { section, href: href.to_string() })
		);

		let mut seen = HashSet::new();
		for (index, faq) in self.faqs.iter().enumerate() {
			if faq.question.trim().is_empty() || faq.answer.trim().is_empty() {
				issues.push(ContentIssue::EmptyFaq { index });
			}

			if !seen.insert(&*faq.question) {
				issues.push(ContentIssue::DuplicateQuestion(faq.question.to_string()));
			}
		}

		issues
	}
}

fn links<'a>(section: &'static str, hubs: &'a [HubLink]) -> impl Iterator<Item = (&'static str, &'a str)> {
	hubs.iter().map(move |l| (section, &*l.href))
}

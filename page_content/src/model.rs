use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One question on the FAQ accordion. The question doubles as the entry's key, so it should be
/// unique within a page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FaqEntry {
	pub question: Cow<'static, str>,
	pub answer: Cow<'static, str>
}

impl FaqEntry {
	#[must_use]
	pub const fn new(question: &'static str, answer: &'static str) -> Self {
		Self { question: Cow::Borrowed(question), answer: Cow::Borrowed(answer) }
	}
}

/// Used for both the category cards under the hero and the feature cards further down.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Card {
	pub title: Cow<'static, str>,
	pub description: Cow<'static, str>,
	pub href: Cow<'static, str>
}

impl Card {
	#[must_use]
	pub const fn new(title: &'static str, description: &'static str, href: &'static str) -> Self {
		Self {
			title: Cow::Borrowed(title),
			description: Cow::Borrowed(description),
			href: Cow::Borrowed(href)
		}
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HubLink {
	pub label: Cow<'static, str>,
	pub href: Cow<'static, str>
}

impl HubLink {
	#[must_use]
	pub const fn new(label: &'static str, href: &'static str) -> Self {
		Self { label: Cow::Borrowed(label), href: Cow::Borrowed(href) }
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Hero {
	pub heading: Cow<'static, str>,
	pub tagline: Cow<'static, str>,
	// the first one gets the accent color, the rest are outlined
	pub actions: Cow<'static, [HubLink]>
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProseSection {
	pub heading: Cow<'static, str>,
	pub body: Cow<'static, str>
}

impl ProseSection {
	#[must_use]
	pub const fn new(heading: &'static str, body: &'static str) -> Self {
		Self { heading: Cow::Borrowed(heading), body: Cow::Borrowed(body) }
	}
}

/// Everything about the site itself that shows up in the `<head>` and the structured data.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SiteInfo {
	pub name: Cow<'static, str>,
	/// Absolute, without a trailing slash
	pub url: Cow<'static, str>,
	pub logo: Cow<'static, str>,
	pub og_image: Cow<'static, str>,
	pub title: Cow<'static, str>,
	pub description: Cow<'static, str>,
	pub keywords: Cow<'static, str>,
	pub robots: Cow<'static, str>,
	pub theme_color: Cow<'static, str>,
	pub website_description: Cow<'static, str>,
	/// Must contain `{search_term_string}`
	pub search_target: Cow<'static, str>,
	pub collection_name: Cow<'static, str>,
	pub collection_description: Cow<'static, str>,
	pub hub_list_name: Cow<'static, str>
}

/// The single source of truth for the home page. The visible sections, the `<head>` tags, and the
/// JSON-LD document are all projected from one of these.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PageContent {
	pub site: SiteInfo,
	#[serde(default)]
	pub hero: Hero,
	#[serde(default)]
	pub categories: Cow<'static, [Card]>,
	#[serde(default)]
	pub features: Cow<'static, [Card]>,
	/// The call-to-action row at the bottom of the page
	#[serde(default)]
	pub hub_links: Cow<'static, [HubLink]>,
	/// The grid inside the long-form section
	#[serde(default)]
	pub category_hubs: Cow<'static, [HubLink]>,
	/// Only used for the `ItemList` node
	#[serde(default)]
	pub content_hubs: Cow<'static, [HubLink]>,
	/// Only used for the `CollectionPage` node
	#[serde(default)]
	pub topics: Cow<'static, [Cow<'static, str>]>,
	#[serde(default)]
	pub prose: Cow<'static, [ProseSection]>,
	#[serde(default)]
	pub faqs: Cow<'static, [FaqEntry]>
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
	#[default]
	Rose,
	Emerald
}

impl AccentColor {
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Rose => "rose",
			Self::Emerald => "emerald"
		}
	}

	#[must_use]
	pub const fn hex(self) -> &'static str {
		match self {
			Self::Rose => "#e11d48",
			Self::Emerald => "#059669"
		}
	}
}

impl fmt::Display for AccentColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown accent color {0:?} (expected \"rose\" or \"emerald\")")]
pub struct UnknownAccent(pub String);

impl FromStr for AccentColor {
	type Err = UnknownAccent;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"rose" => Ok(Self::Rose),
			"emerald" => Ok(Self::Emerald),
			_ => Err(UnknownAccent(s.to_string()))
		}
	}
}

/// The knobs that used to be two slightly different copies of the same page.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PageOptions {
	pub accent: AccentColor,
	pub show_hub_cta: bool,
	/// Whether the JSON-LD graph includes the `CollectionPage` and `ItemList` nodes
	pub hub_graph: bool
}

impl Default for PageOptions {
	fn default() -> Self {
		Self {
			accent: AccentColor::default(),
			show_hub_cta: false,
			hub_graph: true
		}
	}
}

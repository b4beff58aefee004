use std::borrow::Cow;

use crate::{Card, FaqEntry, Hero, HubLink, PageContent, ProseSection, SiteInfo};

pub static HOME_PAGE: PageContent = PageContent {
	site: SiteInfo {
		name: Cow::Borrowed("iLoveRides"),
		url: Cow::Borrowed("https://www.iloverides.com"),
		logo: Cow::Borrowed("https://www.iloverides.com/iloverides-logo.png"),
		og_image: Cow::Borrowed("https://www.iloverides.com/og-image.jpg"),
		title: Cow::Borrowed("iLoveRides | Theme Parks, Roller Coasters & Attractions Encyclopedia"),
		description: Cow::Borrowed("Discover theme parks, roller coasters, water rides, zoos, aquariums, and attractions worldwide. Compare stats, explore maps, and plan trips with data-driven tools and calculators."),
		keywords: Cow::Borrowed("theme parks, roller coasters, rides by speed, tallest rides, zoos, aquariums, water parks, amusement park data, ride comparisons, travel math calculators"),
		robots: Cow::Borrowed("index,follow,max-image-preview:large"),
		theme_color: Cow::Borrowed("#1E3A5F"),
		website_description: Cow::Borrowed("Explore global amusement parks, roller coasters, zoos, aquariums, and water parks with verified stats, comparisons, and travel tools."),
		search_target: Cow::Borrowed("https://www.iloverides.com/?q={search_term_string}"),
		collection_name: Cow::Borrowed("iLoveRides Attraction Encyclopedia"),
		collection_description: Cow::Borrowed("A data-driven encyclopedia covering theme parks, roller coasters, water parks, zoos, aquariums, travel tools, ride stats, and comparison pages."),
		hub_list_name: Cow::Borrowed("iLoveRides Content Hubs")
	},
	hero: Hero {
		heading: Cow::Borrowed("Explore the world’s most exciting rides and attractions"),
		tagline: Cow::Borrowed("Discover theme parks, coasters, and attractions by speed, height, or location. Compare data, plan trips, and learn how thrill engineering meets travel discovery."),
		actions: Cow::Borrowed(HERO_ACTIONS)
	},
	categories: Cow::Borrowed(CATEGORIES),
	features: Cow::Borrowed(FEATURES),
	hub_links: Cow::Borrowed(HUB_LINKS),
	category_hubs: Cow::Borrowed(CATEGORY_HUBS),
	content_hubs: Cow::Borrowed(CONTENT_HUBS),
	topics: Cow::Borrowed(TOPICS),
	prose: Cow::Borrowed(PROSE),
	faqs: Cow::Borrowed(FAQS)
};

const HERO_ACTIONS: &[HubLink] = &[
	HubLink::new("Fastest rides", "/rides-by-speed"),
	HubLink::new("Tallest rides", "/rides-by-height"),
	HubLink::new("Compare attractions", "/compare"),
];

const CATEGORIES: &[Card] = &[
	Card::new(
		"Parks & Resorts",
		"Explore top parks like Disneyland, Universal, Cedar Point, and more with stats, maps, and attractions.",
		"/parks"
	),
	Card::new(
		"Rides Database",
		"Search and compare roller coasters, dark rides, and thrill attractions by speed, height, or type.",
		"/rides"
	),
	Card::new(
		"Travel Calculators",
		"Plan trips using driving, distance, flight, and cost calculators based on real-world data.",
		"/travel-math"
	),
];

const FEATURES: &[Card] = &[
	Card::new(
		"Ride Comparisons",
		"Compare ride stats such as speed, height, drop angle, and duration across multiple parks.",
		"/compare"
	),
	Card::new(
		"Interactive Maps",
		"Visualize attractions, regions, and parks using map-based data tools.",
		"/maps"
	),
	Card::new(
		"Events & Openings",
		"Stay up to date on new rides, park openings, and seasonal events worldwide.",
		"/events"
	),
];

const HUB_LINKS: &[HubLink] = &[
	HubLink::new("Parks", "/parks"),
	HubLink::new("Rides", "/rides"),
	HubLink::new("Zoos", "/zoos"),
	HubLink::new("Aquariums", "/aquariums"),
	HubLink::new("Water Parks", "/water-parks"),
	HubLink::new("Maps", "/maps"),
	HubLink::new("Compare", "/compare"),
	HubLink::new("Ride Calculators", "/ride-calculators"),
	HubLink::new("Events", "/events"),
	HubLink::new("Travel Math", "/travel-math"),
];

const CATEGORY_HUBS: &[HubLink] = &[
	HubLink::new("Theme Parks & Resorts", "/parks"),
	HubLink::new("Roller Coasters & Rides", "/rides"),
	HubLink::new("Zoos & Wildlife Parks", "/zoos"),
	HubLink::new("Aquariums", "/aquariums"),
	HubLink::new("Water Parks", "/water-parks"),
	HubLink::new("Interactive Maps", "/maps"),
	HubLink::new("Ride Comparisons", "/compare"),
	HubLink::new("Ride Calculators", "/ride-calculators"),
	HubLink::new("Events & Openings", "/events"),
];

const CONTENT_HUBS: &[HubLink] = &[
	HubLink::new("Parks & Resorts", "/parks"),
	HubLink::new("Rides Database", "/rides"),
	HubLink::new("Zoos", "/zoos"),
	HubLink::new("Aquariums", "/aquariums"),
	HubLink::new("Water Parks", "/water-parks"),
	HubLink::new("Ride Comparisons", "/compare"),
	HubLink::new("Interactive Maps", "/maps"),
	HubLink::new("Ride Calculators", "/ride-calculators"),
	HubLink::new("Travel Math Tools", "/travel-math"),
	HubLink::new("Events & Openings", "/events"),
];

const TOPICS: &[Cow<'static, str>] = &[
	Cow::Borrowed("Theme Parks"),
	Cow::Borrowed("Roller Coasters"),
	Cow::Borrowed("Zoos"),
	Cow::Borrowed("Aquariums"),
	Cow::Borrowed("Water Parks"),
];

const PROSE: &[ProseSection] = &[
	ProseSection::new(
		"What iLoveRides Covers",
		"iLoveRides is a data-focused attraction encyclopedia built to help you explore the world of theme parks, roller coasters, water parks, zoos, aquariums, and thrill rides. Our database highlights verified statistics such as speed, height, manufacturer, drop angle, duration, and ride type, along with attraction categories found in major regions including the United States, Canada, the United Kingdom, France, Japan, China, and Australia. Whether you enjoy high-intensity launch coasters, dark rides, family attractions, or wildlife exhibits, the platform organizes everything in a clear and searchable structure."
	),
	ProseSection::new(
		"How We Verify Ride and Attraction Data",
		"Ride and attraction data is compiled using multiple trusted sources, including manufacturer specifications, park-released information, public engineering documents, and historical industry records. Each entry is reviewed for accuracy before being published so that the statistics shown reflect real, measurable performance numbers. This includes height, maximum speed, track layout, launch systems, braking systems, and operational notes for roller coasters, as well as habitat details and exhibit highlights for zoos and aquariums. The goal is to maintain an encyclopedia that is both educational and technically accurate."
	),
	ProseSection::new(
		"Why Compare Rides and Attractions?",
		"Comparing rides allows enthusiasts and travelers to understand how different attractions stack up in terms of intensity, engineering, and overall experience. Looking at speed, height, G-forces, layout elements, and ride duration provides insight into how each attraction is designed. For wildlife-focused visitors, comparing zoos and aquariums helps highlight exhibit scale, species variety, and conservation themes. Data-driven comparisons help visitors plan trips, understand what to expect, and appreciate the engineering and design choices that make each attraction unique."
	),
];

const FAQS: &[FaqEntry] = &[
	FaqEntry::new(
		"What is iLoveRides?",
		"A data-driven encyclopedia for theme parks, roller coasters, water rides, zoos, and aquariums. Explore attractions by speed, height, park, or location."
	),
	FaqEntry::new(
		"Do you review or rank rides?",
		"No. iLoveRides focuses on verified data such as speed, height, and manufacturer details. It is an information resource, not a review site."
	),
	FaqEntry::new(
		"Which regions are covered?",
		"We include major parks and flagship attractions across the United States, Canada, United Kingdom, France, Japan, China, and Australia."
	),
	FaqEntry::new(
		"What tools can I use?",
		"Explore sortable tables, compare rides side by side, view interactive maps, and calculate travel distances or times between destinations."
	),
	FaqEntry::new(
		"Is the information verified?",
		"Attraction data is compiled from official park sources, manufacturers, and industry databases whenever available."
	),
	FaqEntry::new(
		"What types of attractions does iLoveRides cover?",
		"iLoveRides includes theme parks, roller coasters, dark rides, water rides, drop towers, zoos, aquariums, and major attractions worldwide. Each entry focuses on verified data such as speed, height, manufacturer, and opening year."
	),
	FaqEntry::new(
		"Where does the attraction data come from?",
		"Information is compiled from official park websites, manufacturers like Intamin, B&M, Zamperla, and Mack Rides, industry databases, and public engineering documents whenever available. Data is continuously updated."
	),
	FaqEntry::new(
		"Can I compare roller coasters and rides side by side?",
		"Yes. iLoveRides offers comparison tools that let you compare speed, height, drop angle, track length, inversions, G-forces, and manufacturer details between multiple attractions."
	),
	FaqEntry::new(
		"Do you provide ride rankings or ratings?",
		"No. iLoveRides is not a review or ranking site. It provides factual, engineering-based ride data without subjective rankings or personal opinions."
	),
	FaqEntry::new(
		"Which countries are currently included?",
		"The site covers major attractions in the United States, Canada, United Kingdom, France, Germany, Japan, China, South Korea, United Arab Emirates, and Australia. New regions are added regularly."
	),
	FaqEntry::new(
		"How accurate are the speed and height measurements?",
		"Ride stats are sourced from official park disclosures and manufacturers. If multiple values exist, iLoveRides lists the most widely accepted specification and notes any discrepancies when relevant."
	),
	FaqEntry::new(
		"Does iLoveRides include opening dates and park history?",
		"Yes. Many attraction pages include opening years, previous names, refurbishments, relocations, and manufacturer history if available."
	),
	FaqEntry::new(
		"Can I find rides by speed, height, or G-force?",
		"Absolutely. Visitors can browse categories such as fastest rides, tallest coasters, most inversions, and high-G attractions using the site’s sorting tools."
	),
	FaqEntry::new(
		"Do you track ride closures or refurbishments?",
		"Major closures, refurbishments, and re-themes are included when confirmed by the park or manufacturer. Temporary or unverified rumors are not reported."
	),
	FaqEntry::new(
		"Are maps or geographic tools available?",
		"Yes. iLoveRides features interactive maps showing ride locations, park boundaries, and nearby attractions to help travelers plan visits efficiently."
	),
	FaqEntry::new(
		"Can I calculate travel time between parks?",
		"Yes. The Travel Math tools include driving distances, travel times, cost estimates, and multi-destination planning for theme park trips."
	),
	FaqEntry::new(
		"Does iLoveRides include water parks and aquatic attractions?",
		"Yes. Water rides, slides, wave pools, and aquatic shows are included alongside theme park and zoo attractions, especially major or record-breaking installations."
	),
	FaqEntry::new(
		"Does the site track new ride announcements and openings?",
		"Yes. The Events & Openings section monitors major ride announcements, opening dates, construction progress, and seasonal park events."
	),
	FaqEntry::new(
		"Is iLoveRides affiliated with any theme parks?",
		"No. iLoveRides is an independent resource with no official partnership or endorsement from any amusement park, manufacturer, or operator."
	),
	FaqEntry::new(
		"Is the site suitable for planning family trips?",
		"Yes. iLoveRides helps families choose attractions by type, intensity, and height requirements. Data-driven tools make it easier to plan age-appropriate and efficient park itineraries."
	),
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn home_page_has_no_issues() {
		let issues = HOME_PAGE.issues();
		assert!(issues.is_empty(), "{issues:?}");
	}

	#[test]
	fn home_page_sizes() {
		assert_eq!(HOME_PAGE.faqs.len(), 20);
		assert_eq!(HOME_PAGE.categories.len(), 3);
		assert_eq!(HOME_PAGE.features.len(), 3);
		assert_eq!(HOME_PAGE.hub_links.len(), 10);
		assert_eq!(HOME_PAGE.content_hubs.len(), 10);
	}
}

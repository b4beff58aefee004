use axum::{extract::State, http::StatusCode, response::Html};
use horrorshow::{helper::doctype, html, RenderOnce, Template, TemplateBuffer};
use page_content::{Card, Hero, HubLink, PageContent, PageOptions, ProseSection};
use tracing::{debug, error};

use crate::{faq::FaqSection, head::Head, AppState};

pub async fn get_home_view(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
	debug!("Rendering home page");

	render_home(&state.content, &state.options)
		.map(Html)
		.map_err(|e| {
			error!("Couldn't render home page: {e:?}");
			StatusCode::INTERNAL_SERVER_ERROR
		})
}

pub fn render_home(content: &PageContent, options: &PageOptions) -> Result<String, horrorshow::Error> {
	HomePage { content, options }.into_string()
}

pub struct HomePage<'a> {
	pub content: &'a PageContent,
	pub options: &'a PageOptions
}

impl RenderOnce for HomePage<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let content = self.content;

		tmpl << html! {
			: doctype::HTML;
			html(lang = "en") {
				: Head { content, options: self.options };
				body {
					main {
						: HeroSection(&content.hero);
						@ if !content.categories.is_empty() {
							section(id = "categories", class = "container") {
								div(class = "card-grid") : Cards { cards: &content.categories, explore: true };
							}
						}
						@ if !content.features.is_empty() {
							section(id = "features", class = "container") {
								h2 : "What you can explore";
								p : "Find attractions by speed, height, park, or thrill type. Use calculators and comparison tools to explore global theme parks and data-driven insights.";
								div(class = "card-grid") : Cards { cards: &content.features, explore: false };
							}
						}
						: ExploreSection { content };
						@ for prose in content.prose.iter() {
							: Prose(prose);
						}
						@ if self.options.show_hub_cta {
							: HubCta(&content.hub_links);
						}
						: FaqSection(&content.faqs);
					}
				}
			}
		};
	}
}

struct HeroSection<'a>(&'a Hero);

impl RenderOnce for HeroSection<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let hero = self.0;

		tmpl << html! {
			section(id = "hero") {
				div(class = "container") {
					h1 : &*hero.heading;
					p(class = "tagline") : &*hero.tagline;
					div(class = "hero-actions") : HeroActions(&hero.actions);
				}
			}
		};
	}
}

struct HeroActions<'a>(&'a [HubLink]);

impl RenderOnce for HeroActions<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		tmpl << html! {
			@ for action in self.0.iter().take(1) {
				a(href = &*action.href, class = "hero-action primary") : &*action.label;
			}
			@ for action in self.0.iter().skip(1) {
				a(href = &*action.href, class = "hero-action") : &*action.label;
			}
		};
	}
}

struct Cards<'a> {
	cards: &'a [Card],
	explore: bool
}

impl RenderOnce for Cards<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		tmpl << html! {
			@ for card in self.cards {
				a(href = &*card.href, class = "card") {
					h3 : &*card.title;
					p : &*card.description;
					@ if self.explore {
						div(class = "explore") : "Explore →";
					}
				}
			}
		};
	}
}

/// The long-form section in the middle of the page. Most of the copy here is fixed, only the hub
/// grid comes from the page definition.
struct ExploreSection<'a> {
	content: &'a PageContent
}

impl RenderOnce for ExploreSection<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let hubs = &self.content.category_hubs;

		tmpl << html! {
			section(id = "explore", class = "container") {
				h2 : "Explore Global Theme Parks, Rides, and Attractions";
				p : "iLoveRides is a data-driven encyclopedia built for ride enthusiasts, travelers, and engineering fans. Explore verified stats for theme parks, roller coasters, zoos, aquariums, and water parks across the United States, Canada, United Kingdom, Japan, France, China, and Australia. Every attraction includes reliable details such as top speed, ride height, G-force, track length, manufacturer, opening year, and intensity level.";

				h3 : "What You Can Explore on iLoveRides";
				ul {
					li : "Theme park profiles with maps, attraction lists, and quick facts.";
					li : "Roller coaster database with speed, height, layout, and stats.";
					li : "Rides sorted by speed, height, drop angle, duration, and region.";
					li : "Zoo and aquarium databases featuring major exhibits and habitats.";
					li : "Water park attractions, tall slides, and aquatic thrill features.";
					li : "Events calendar for openings, refurbishments, festivals, and seasonal shows.";
					li {
						: "Interactive ride comparison tools such as";
						a(href = "/compare/space-mountain-vs-incredicoaster", class = "inline-link") : "Space Mountain vs. Incredicoaster";
						: ".";
					}
					li : "Travel Math tools including driving distance, flight time, cost estimates, and multi-stop planners.";
					li : "Sortable tables like “Fastest Roller Coasters in Asia” and “Tallest Coasters in the US.”";
				}

				@ if !hubs.is_empty() {
					h3 : "Explore Our Attraction Categories";
					p : "All attraction pages are grouped into clean, search-friendly hubs:";
					div(class = "hub-grid") {
						@ for hub in hubs.iter() {
							a(href = &*hub.href) : &*hub.label;
						}
					}
				}

				h3 : "Advanced Travel Planning Tools";
				p : "Plan your theme park trips using built-in Travel Math pages inspired by tools like TravelMath.com. Whether you're calculating miles between Disneyland and Universal Hollywood, flight duration to Tokyo Disney Resort, or the total cost of a multi-park vacation, iLoveRides makes travel math simple.";
			}
		};
	}
}

struct Prose<'a>(&'a ProseSection);

impl RenderOnce for Prose<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		tmpl << html! {
			section(class = "container prose") {
				h2 : &*self.0.heading;
				p : &*self.0.body;
			}
		};
	}
}

struct HubCta<'a>(&'a [HubLink]);

impl RenderOnce for HubCta<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		if self.0.is_empty() {
			return;
		}

		tmpl << html! {
			section(id = "hub-cta", class = "container") {
				h2 : "Start exploring";
				div(class = "hub-links") {
					@ for link in self.0 {
						a(href = &*link.href) : &*link.label;
					}
				}
			}
		};
	}
}

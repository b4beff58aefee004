use axum::{extract::State, Json};
use horrorshow::{html, Raw, RenderOnce, TemplateBuffer};
use page_content::{meta_tags, script_body, structured_data, MetaTag, PageContent, PageOptions};
use serde_json::Value;

use crate::{style, AppState};

pub struct Head<'a> {
	pub content: &'a PageContent,
	pub options: &'a PageOptions
}

impl RenderOnce for Head<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let tags = meta_tags(&self.content.site);
		let json_ld = script_body(&structured_data(self.content, self.options));

		tmpl << html! {
			head {
				meta(charset = "utf-8");
				meta(name = "viewport", content = "width=device-width, initial-scale=1");
				@ for tag in tags {
					: Tag(tag);
				}
				link(rel = "canonical", href = &*self.content.site.url);
				style : Raw(style::PAGE_STYLE);
				style : Raw(style::accent_style(self.options.accent));
				script(type = "application/ld+json") : Raw(json_ld);
			}
		};
	}
}

struct Tag<'a>(MetaTag<'a>);

impl RenderOnce for Tag<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		match self.0 {
			MetaTag::Title(title) => tmpl << html! { title : title; },
			MetaTag::Name { name, content } => tmpl << html! { meta(name = name, content = content); },
			MetaTag::Property { property, content } => tmpl << html! { meta(property = property, content = content); }
		};
	}
}

pub async fn get_structured_data(State(state): State<AppState>) -> Json<Value> {
	Json(structured_data(&state.content, &state.options))
}

#[cfg(test)]
mod tests {
	use horrorshow::Template;
	use page_content::HOME_PAGE;

	use super::*;

	fn render(options: &PageOptions) -> String {
		Head { content: &HOME_PAGE, options }.into_string().unwrap()
	}

	#[test]
	fn has_one_title_and_description() {
		let head = render(&PageOptions::default());

		assert_eq!(head.matches("<title>").count(), 1);
		assert_eq!(head.matches(r#"<meta name="description""#).count(), 1);
		assert!(head.contains(r#"<meta property="og:type" content="website""#));
		assert!(head.contains(r#"<meta name="robots" content="index,follow,max-image-preview:large""#));
	}

	#[test]
	fn embeds_structured_data() {
		let head = render(&PageOptions::default());

		let start = head.find(r#"<script type="application/ld+json">"#).unwrap();
		let body = &head[start..];
		let body = &body[body.find('>').unwrap() + 1..body.find("</script>").unwrap()];

		let doc: Value = serde_json::from_str(body).unwrap();
		assert_eq!(doc["@context"], "https://schema.org");
		assert_eq!(doc, structured_data(&HOME_PAGE, &PageOptions::default()));
	}

	#[test]
	fn accent_color_is_applied() {
		let options = PageOptions { accent: page_content::AccentColor::Emerald, ..PageOptions::default() };
		assert!(render(&options).contains("--accent: #059669;"));
	}
}

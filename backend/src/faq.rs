use horrorshow::{html, RenderOnce, TemplateBuffer};
use page_content::FaqEntry;

/// The accordion at the bottom of the page. It iterates the exact slice that `FAQPage.mainEntity`
/// is built from.
pub struct FaqSection<'a>(pub &'a [FaqEntry]);

impl RenderOnce for FaqSection<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		if self.0.is_empty() {
			return;
		}

		tmpl << html! {
			section(id = "faq") {
				div(class = "container") {
					h2 : "FAQ";
					div(class = "faq-list") {
						@ for faq in self.0 {
							details(class = "faq") {
								summary(class = "question") : &*faq.question;
								div(class = "answer") : &*faq.answer;
							}
						}
					}
				}
			}
		};
	}
}

#[cfg(test)]
mod tests {
	use std::borrow::Cow;

	use horrorshow::Template;
	use page_content::HOME_PAGE;

	use super::*;

	fn escape(text: &str) -> String {
		text.replace('&', "&amp;")
			.replace('<', "&lt;")
			.replace('>', "&gt;")
	}

	#[test]
	fn one_block_per_entry() {
		let html = FaqSection(&HOME_PAGE.faqs).into_string().unwrap();

		assert_eq!(html.matches("<details").count(), HOME_PAGE.faqs.len());

		for faq in HOME_PAGE.faqs.iter() {
			let block = format!(
				r#"<details class="faq"><summary class="question">{}</summary><div class="answer">{}</div></details>"#,
				escape(&faq.question),
				escape(&faq.answer)
			);
			assert_eq!(html.matches(&block).count(), 1, "{}", faq.question);
		}
	}

	#[test]
	fn keeps_order() {
		let html = FaqSection(&HOME_PAGE.faqs).into_string().unwrap();

		let positions = HOME_PAGE.faqs.iter()
			.map(|faq| html.find(&escape(&faq.question)).unwrap())
			.collect::<Vec<_>>();

		assert!(positions.windows(2).all(|w| w[0] < w[1]));
	}

	#[test]
	fn escapes_markup() {
		let faqs = [FaqEntry {
			question: Cow::Borrowed("Is <b>this</b> bold?"),
			answer: Cow::Borrowed("No & never")
		}];
		let html = FaqSection(&faqs).into_string().unwrap();

		assert!(html.contains("Is &lt;b&gt;this&lt;/b&gt; bold?"));
		assert!(html.contains("No &amp; never"));
	}

	#[test]
	fn empty_list_renders_nothing() {
		assert_eq!(FaqSection(&[]).into_string().unwrap(), "");
	}
}

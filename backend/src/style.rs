use const_format::concatcp;
use page_content::AccentColor;

const BASE_STYLE: &str = r#"
* {
	--page-background: #F4F6FA;
	--main-text: #111827;
	--secondary-text: #334155;
	--navy: #1E3A5F;
	--navy-border: #142746;
	--card-border: #e2e8f0;
	--card-background: #ffffff;
	box-sizing: border-box;
}
body {
	margin: 0;
	background-color: var(--page-background);
	color: var(--main-text);
	font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
	line-height: 1.5;
}
a {
	text-decoration: none;
	color: inherit;
}
.container {
	max-width: 72rem;
	margin: 0 auto;
	padding: 0 16px;
}
h2 {
	font-size: 30px;
	color: var(--navy);
}
h3 {
	color: var(--navy);
}
p, li {
	color: var(--secondary-text);
}
"#;

const HERO_STYLE: &str = r"
#hero {
	background-color: var(--navy);
	border-bottom: 1px solid var(--navy-border);
	padding: 64px 0 56px 0;
}
#hero h1 {
	font-size: 48px;
	font-weight: 800;
	line-height: 1.15;
	color: white;
	margin: 0;
}
#hero .tagline {
	margin-top: 20px;
	font-size: 18px;
	max-width: 42rem;
	color: #e2e8f0;
}
.hero-actions {
	margin-top: 32px;
	display: flex;
	flex-wrap: wrap;
	gap: 12px;
}
.hero-action {
	border-radius: 12px;
	border: 2px solid white;
	padding: 12px 20px;
	font-weight: 600;
	color: white;
}
.hero-action.primary {
	background-color: var(--accent);
	border-color: var(--accent);
}
";

const CARD_STYLE: &str = r"
.card-grid {
	display: grid;
	gap: 24px;
	grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
	margin-top: 32px;
}
.card {
	border-radius: 16px;
	border: 2px solid var(--card-border);
	background-color: var(--card-background);
	padding: 24px;
	box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
	transition: box-shadow 0.2s linear;
}
.card:hover {
	box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
}
.card h3 {
	font-size: 18px;
	margin: 0;
}
.card .explore {
	margin-top: 12px;
	font-size: 14px;
	font-weight: 600;
	color: var(--accent);
}
.hub-grid {
	display: grid;
	gap: 16px;
	grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
}
.hub-grid a {
	padding: 16px;
	border-radius: 12px;
	border: 1px solid var(--card-border);
	background-color: var(--card-background);
}
.inline-link {
	color: var(--accent);
	padding-left: 4px;
}
#hub-cta {
	margin: 48px 0;
	text-align: center;
}
#hub-cta .hub-links {
	display: flex;
	flex-wrap: wrap;
	justify-content: center;
	gap: 12px;
}
#hub-cta .hub-links a {
	border-radius: 999px;
	padding: 8px 16px;
	background-color: var(--accent);
	color: white;
	font-weight: 600;
}
";

const FAQ_STYLE: &str = r"
#faq {
	padding-bottom: 80px;
}
.faq-list {
	border-radius: 16px;
	border: 2px solid var(--card-border);
	background-color: var(--card-background);
}
.faq + .faq {
	border-top: 1px solid var(--card-border);
}
.faq[open] {
	background-color: #F9FAFB;
}
.faq .question {
	cursor: pointer;
	list-style: none;
	padding: 20px 24px;
	font-size: 18px;
	font-weight: 500;
}
.faq .answer {
	padding: 0 24px 20px 24px;
	color: var(--secondary-text);
}
";

pub const PAGE_STYLE: &str = concatcp!(BASE_STYLE, HERO_STYLE, CARD_STYLE, FAQ_STYLE);

#[must_use]
pub fn accent_style(accent: AccentColor) -> String {
	format!(":root {{ --accent: {}; }}", accent.hex())
}

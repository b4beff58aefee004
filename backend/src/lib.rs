use std::{path::Path, sync::Arc};

use axum::{routing::get, Router};
use page_content::{PageContent, PageOptions};
use tower_http::services::ServeDir;

pub mod config;
pub mod faq;
pub mod head;
pub mod home;
pub mod robots;
pub mod style;

#[derive(Clone)]
pub struct AppState {
	pub content: Arc<PageContent>,
	pub options: PageOptions
}

impl AppState {
	pub fn new(content: PageContent, options: PageOptions) -> Self {
		Self { content: Arc::new(content), options }
	}
}

pub fn app(state: AppState, asset_dir: Option<&Path>) -> Router {
	let router = Router::new()
		.route("/", get(home::get_home_view))
		.route("/api/structured_data", get(head::get_structured_data))
		.route("/robots.txt", get(robots::get_robots_txt))
		.route("/sitemap.xml", get(robots::get_sitemap_xml))
		.with_state(state);

	match asset_dir {
		Some(dir) => router.fallback_service(ServeDir::new(dir)),
		None => router
	}
}

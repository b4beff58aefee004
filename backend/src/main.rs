use backend::{app, config::ServerConfig, AppState};
use page_content::{PageContent, HOME_PAGE};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::registry()
		.with(fmt::layer())
		.with(filter)
		.init();

	let config = ServerConfig::from_env();

	let content = match config.content_file {
		Some(ref path) => {
			info!("Reading page content from {}", path.display());
			PageContent::from_path(path)?
		},
		None => {
			info!("Using the built-in home page");
			HOME_PAGE.clone()
		}
	};

	// Nothing here is fatal; a bad link still renders, it's just a bad link
	let issues = content.issues();
	for issue in &issues {
		warn!("{issue}");
	}

	info!(
		"Loaded {} faqs ({} issues), accent = {}, hub cta = {}, hub graph = {}",
		content.faqs.len(),
		issues.len(),
		config.options.accent,
		config.options.show_hub_cta,
		config.options.hub_graph
	);

	if let Some(ref dir) = config.asset_dir {
		info!("Serving static assets from {}", dir.display());
	}

	let state = AppState::new(content, config.options);
	let listener = TcpListener::bind(config.addr).await?;

	info!("Serving axum on {}...", config.addr);

	axum::serve(listener, app(state, config.asset_dir.as_deref())).await?;

	Ok(())
}

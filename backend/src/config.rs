use std::{
	net::{IpAddr, Ipv4Addr, SocketAddr},
	path::PathBuf
};

use page_content::{AccentColor, PageOptions};
use tracing::warn;

macro_rules! var_or{
	($lookup:ident, $key:expr, $default:expr, $type:ident) => {
		$lookup($key)
			.and_then(|v| v.parse::<$type>().ok())
			.unwrap_or($default)
	}
}

pub struct ServerConfig {
	pub addr: SocketAddr,
	/// A json page definition to serve instead of the built-in one
	pub content_file: Option<PathBuf>,
	/// Served as the fallback for anything the router doesn't know about (logo, og image, etc)
	pub asset_dir: Option<PathBuf>,
	pub options: PageOptions
}

impl ServerConfig {
	/// Reads `.env` and the process environment.
	pub fn from_env() -> Self {
		Self::from_lookup(|key| dotenv::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let port = var_or!(lookup, "BACKEND_PORT", 8080, u16);
		let ip = var_or!(lookup, "BIND_ADDR", IpAddr::V4(Ipv4Addr::LOCALHOST), IpAddr);

		let path_var = |key: &str| lookup(key)
			.and_then(|v| (!v.is_empty()).then(|| PathBuf::from(v)));

		let accent = match lookup("ACCENT_COLOR") {
			None => AccentColor::default(),
			Some(val) => val.parse::<AccentColor>().unwrap_or_else(|e| {
				warn!("{e}; falling back to {}", AccentColor::default());
				AccentColor::default()
			})
		};

		let defaults = PageOptions::default();

		Self {
			addr: SocketAddr::new(ip, port),
			content_file: path_var("CONTENT_FILE"),
			asset_dir: path_var("ASSET_DIR"),
			options: PageOptions {
				accent,
				show_hub_cta: var_or!(lookup, "SHOW_HUB_CTA", defaults.show_hub_cta, bool),
				hub_graph: var_or!(lookup, "HUB_GRAPH", defaults.hub_graph, bool)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use pretty_assertions::assert_eq;

	use super::*;

	fn config(vars: &[(&str, &str)]) -> ServerConfig {
		let vars = vars.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect::<HashMap<_, _>>();
		ServerConfig::from_lookup(|key| vars.get(key).cloned())
	}

	#[test]
	fn defaults() {
		let config = config(&[]);

		assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
		assert_eq!(config.content_file, None);
		assert_eq!(config.asset_dir, None);
		assert_eq!(config.options, PageOptions::default());
	}

	#[test]
	fn reads_everything() {
		let config = config(&[
			("BACKEND_PORT", "3000"),
			("BIND_ADDR", "0.0.0.0"),
			("CONTENT_FILE", "/srv/home.json"),
			("ASSET_DIR", "/srv/assets"),
			("ACCENT_COLOR", "emerald"),
			("SHOW_HUB_CTA", "true"),
			("HUB_GRAPH", "false"),
		]);

		assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 3000)));
		assert_eq!(config.content_file, Some(PathBuf::from("/srv/home.json")));
		assert_eq!(config.asset_dir, Some(PathBuf::from("/srv/assets")));
		assert_eq!(config.options, PageOptions {
			accent: AccentColor::Emerald,
			show_hub_cta: true,
			hub_graph: false
		});
	}

	#[test]
	fn bad_values_fall_back() {
		let config = config(&[
			("BACKEND_PORT", "not a port"),
			("ACCENT_COLOR", "chartreuse"),
			("SHOW_HUB_CTA", "yes please"),
			("CONTENT_FILE", ""),
		]);

		assert_eq!(config.addr.port(), 8080);
		assert_eq!(config.content_file, None);
		assert_eq!(config.options, PageOptions::default());
	}
}

extern crate clap;

#[derive(Clone, Debug, v_utils::macros::MyConfigPrimitives)]
#[cfg_attr(feature = "ssr", derive(v_utils::macros::Settings))]
pub struct Settings {
	#[serde(default)]
	pub backend: BackendConfig,
	/// Base URL for the site
	#[serde(default = "__default_site_url")]
	#[primitives(skip)]
	pub site_url: String,
}

fn __default_site_url() -> String {
	"http://localhost:61212".to_string()
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			backend: BackendConfig::default(),
			site_url: __default_site_url(),
		}
	}
}

/// Settings for the hosted backend platform the site talks to (identity
/// provider + document store). Each value falls back to a process
/// environment variable; absent variables become empty strings and surface
/// as request failures downstream rather than startup errors.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct BackendConfig {
	#[serde(default = "__env_api_key")]
	pub api_key: String,
	#[serde(default = "__env_auth_domain")]
	pub auth_domain: String,
	#[serde(default = "__env_project_id")]
	pub project_id: String,
	#[serde(default = "__env_storage_bucket")]
	pub storage_bucket: String,
	#[serde(default = "__env_messaging_sender_id")]
	pub messaging_sender_id: String,
	#[serde(default = "__env_app_id")]
	pub app_id: String,
	#[serde(default = "__env_measurement_id")]
	pub measurement_id: String,
}

impl Default for BackendConfig {
	fn default() -> Self {
		Self {
			api_key: __env_api_key(),
			auth_domain: __env_auth_domain(),
			project_id: __env_project_id(),
			storage_bucket: __env_storage_bucket(),
			messaging_sender_id: __env_messaging_sender_id(),
			app_id: __env_app_id(),
			measurement_id: __env_measurement_id(),
		}
	}
}

fn env_or_empty(var: &str) -> String {
	std::env::var(var).unwrap_or_default()
}

fn __env_api_key() -> String {
	env_or_empty("LOOKANDLEARN_BACKEND_APIKEY")
}

fn __env_auth_domain() -> String {
	env_or_empty("LOOKANDLEARN_BACKEND_AUTHDOMAIN")
}

fn __env_project_id() -> String {
	env_or_empty("LOOKANDLEARN_BACKEND_PROJECT")
}

fn __env_storage_bucket() -> String {
	env_or_empty("LOOKANDLEARN_BACKEND_STORAGEBUCKET")
}

fn __env_messaging_sender_id() -> String {
	env_or_empty("LOOKANDLEARN_BACKEND_MESSAGINGSENDERID")
}

fn __env_app_id() -> String {
	env_or_empty("LOOKANDLEARN_BACKEND_APPID")
}

fn __env_measurement_id() -> String {
	env_or_empty("LOOKANDLEARN_BACKEND_MEASUREMENTID")
}

use color_eyre::eyre::{Context, Result};
use serde::Deserialize;

use crate::config::BackendConfig;

/// Thin REST client for the hosted identity provider. Consumed read-only:
/// we verify credentials and resolve session tokens, account management
/// lives on the platform.
#[derive(Clone)]
pub struct IdentityClient {
	http: reqwest::Client,
	base: String,
	api_key: String,
}

impl std::fmt::Debug for IdentityClient {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("IdentityClient").field("base", &self.base).finish()
	}
}

#[derive(Clone, Debug)]
pub struct SignedInUser {
	pub uid: String,
	pub token: String,
}

impl IdentityClient {
	pub fn new(config: &BackendConfig) -> Self {
		Self {
			http: reqwest::Client::new(),
			base: format!("https://{}/v1", config.auth_domain),
			api_key: config.api_key.clone(),
		}
	}

	/// Password sign-in. `Ok(None)` on rejected credentials; `Err` only on
	/// transport or decoding failures.
	pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Option<SignedInUser>> {
		#[derive(Deserialize)]
		#[serde(rename_all = "camelCase")]
		struct SignInResponse {
			local_id: String,
			id_token: String,
		}

		let response = self
			.http
			.post(format!("{}/accounts:signInWithPassword?key={}", self.base, self.api_key))
			.json(&serde_json::json!({
				"email": email,
				"password": password,
				"returnSecureToken": true,
			}))
			.send()
			.await
			.context("Failed to reach identity provider")?;

		if response.status() == reqwest::StatusCode::BAD_REQUEST {
			return Ok(None);
		}
		let response = response.error_for_status().context("Identity provider rejected sign-in request")?;
		let body: SignInResponse = response.json().await.context("Failed to parse sign-in response")?;
		Ok(Some(SignedInUser {
			uid: body.local_id,
			token: body.id_token,
		}))
	}

	/// Resolve a session token to the identity it belongs to.
	/// `Ok(None)` when the token is expired or unknown.
	pub async fn lookup(&self, token: &str) -> Result<Option<String>> {
		#[derive(Deserialize)]
		#[serde(rename_all = "camelCase")]
		struct LookupUser {
			local_id: String,
		}
		#[derive(Deserialize)]
		struct LookupResponse {
			#[serde(default)]
			users: Vec<LookupUser>,
		}

		let response = self
			.http
			.post(format!("{}/accounts:lookup?key={}", self.base, self.api_key))
			.json(&serde_json::json!({ "idToken": token }))
			.send()
			.await
			.context("Failed to reach identity provider")?;

		if !response.status().is_success() {
			return Ok(None);
		}
		let body: LookupResponse = response.json().await.context("Failed to parse token lookup response")?;
		Ok(body.users.into_iter().next().map(|u| u.local_id))
	}
}

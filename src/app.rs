use leptos::{ev, html::*, prelude::*};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_routable::prelude::*;
use leptos_router::components::{A, AProps, Router};

use crate::{
	backend::{Session, UserProfile},
	main_page::{self, MainView},
	signup::{self, SignUpView},
};

// Server functions for session management and profile lookup
#[cfg(feature = "ssr")]
pub mod server_impl {
	use leptos::server_fn::error::ServerFnError;
	use tracing::{error, info, instrument};

	use super::*;
	use crate::{
		backend::{DocStore, IdentityClient},
		config::Settings,
	};

	const SESSION_COOKIE: &str = "session_token";

	fn get_settings() -> Result<Settings, ServerFnError> {
		use_context::<Settings>().ok_or_else(|| ServerFnError::new("Settings not available"))
	}

	fn session_token(headers: &axum::http::HeaderMap) -> Option<String> {
		use axum::http::header::COOKIE;
		headers.get(COOKIE).and_then(|v| v.to_str().ok()).and_then(|cookies| {
			cookies.split(';').find_map(|cookie| {
				let cookie = cookie.trim();
				cookie.strip_prefix(&format!("{SESSION_COOKIE}=")).map(|t| t.to_string())
			})
		})
	}

	#[instrument(skip(password), fields(email = %email))]
	pub async fn sign_in_impl(email: String, password: String) -> Result<Session, ServerFnError> {
		info!("Sign-in attempt");
		let settings = get_settings()?;
		let identity = IdentityClient::new(&settings.backend);

		let signed_in = identity
			.sign_in_with_password(&email, &password)
			.await
			.map_err(|e| {
				error!("Identity provider error during sign-in: {}", e);
				ServerFnError::new(format!("Identity provider error: {}", e))
			})?
			.ok_or_else(|| {
				info!("Credentials rejected");
				ServerFnError::new("Invalid email or password")
			})?;

		// Set cookie via response header
		use leptos_axum::ResponseOptions;
		if let Some(response) = use_context::<ResponseOptions>() {
			response.insert_header(
				axum::http::header::SET_COOKIE,
				axum::http::HeaderValue::from_str(&format!(
					"{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
					signed_in.token,
					60 * 60 * 24 * 7 // 1 week in seconds
				))
				.unwrap(),
			);
		}

		info!("Sign-in successful");
		Ok(Session { uid: signed_in.uid })
	}

	pub async fn current_session_impl() -> Result<Option<Session>, ServerFnError> {
		use leptos_axum::extract;

		let headers: axum::http::HeaderMap = extract().await.map_err(|e| ServerFnError::new(format!("Failed to extract headers: {}", e)))?;

		let Some(token) = session_token(&headers) else {
			return Ok(None);
		};

		let settings = get_settings()?;
		let identity = IdentityClient::new(&settings.backend);

		match identity.lookup(&token).await {
			Ok(Some(uid)) => Ok(Some(Session { uid })),
			Ok(None) => Ok(None),
			Err(e) => {
				// A lookup failure reads as "no session"; the visitor lands on
				// the login surface either way.
				error!("Identity provider error during session lookup: {}", e);
				Ok(None)
			}
		}
	}

	pub async fn sign_out_impl() -> Result<(), ServerFnError> {
		use leptos_axum::ResponseOptions;

		// Clear cookie
		if let Some(response) = use_context::<ResponseOptions>() {
			response.insert_header(
				axum::http::header::SET_COOKIE,
				axum::http::HeaderValue::from_str(&format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")).unwrap(),
			);
		}

		Ok(())
	}

	#[instrument]
	pub async fn fetch_profile_impl(uid: String) -> Result<Option<UserProfile>, ServerFnError> {
		let settings = get_settings()?;
		let store = DocStore::new(&settings.backend);

		let Some(fields) = store.get_document("users", &uid).await.map_err(|e| {
			error!("Document store error fetching profile: {}", e);
			ServerFnError::new(format!("Document store error: {}", e))
		})?
		else {
			info!("No profile record for identity");
			return Ok(None);
		};

		let profile = UserProfile::from_fields(&fields).map_err(|e| {
			error!("Malformed profile record: {}", e);
			ServerFnError::new(format!("Malformed profile record: {}", e))
		})?;
		Ok(Some(profile))
	}
}

#[server(SignIn)]
pub async fn sign_in(email: String, password: String) -> Result<Session, ServerFnError> {
	server_impl::sign_in_impl(email, password).await
}

#[server(CurrentSession)]
pub async fn current_session() -> Result<Option<Session>, ServerFnError> {
	server_impl::current_session_impl().await
}

#[server(SignOut)]
pub async fn sign_out() -> Result<(), ServerFnError> {
	server_impl::sign_out_impl().await
}

#[server(FetchProfile)]
pub async fn fetch_profile(uid: String) -> Result<Option<UserProfile>, ServerFnError> {
	server_impl::fetch_profile_impl(uid).await
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
	view! {
		<!DOCTYPE html>
		<html lang="en">
			<head>
				<meta charset="utf-8" />
				<meta name="viewport" content="width=device-width, initial-scale=1" />
				<AutoReload options=options.clone() />
				<HydrationScripts options islands=true />
				<MetaTags />
			</head>
			<body>
				<App />
			</body>
		</html>
	}
}

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	(
		Stylesheet(StylesheetProps {
			id: Some("leptos".to_owned()),
			href: format!("/pkg/{}.css", env!("CARGO_PKG_NAME")),
		}),
		Title(TitleProps {
			formatter: None,
			text: Some("Look and Learn".into()),
		}),
		view! {
			<Router>
				<main class="min-h-screen bg-gray-50">{move || AppRoutes::routes()}</main>
			</Router>
		},
	)
}

#[derive(Routable)]
#[routes(view_prefix = "", view_suffix = "View", transition = false)]
pub enum AppRoutes {
	#[route(path = "/")]
	Home,
	#[parent_route(path = "/main")]
	Main(main_page::Routes),
	#[parent_route(path = "/signup")]
	SignUp(signup::Routes),
	#[route(path = "/login")]
	Login,
	#[fallback]
	#[route(path = "/404")]
	NotFound,
}

/// Renders the home page - redirects to /main
#[component]
fn HomeView() -> impl IntoView {
	// SSR redirect
	#[cfg(feature = "ssr")]
	{
		use leptos_axum::ResponseOptions;
		if let Some(response) = use_context::<ResponseOptions>() {
			response.set_status(axum::http::StatusCode::TEMPORARY_REDIRECT);
			response.insert_header(axum::http::header::LOCATION, axum::http::HeaderValue::from_static("/main"));
		}
	}
	// Return minimal content (won't be seen due to redirect)
	()
}

#[component]
fn LoginView() -> impl IntoView {
	section().class("p-4 max-w-md mx-auto mt-8").child((
		Title(TitleProps {
			formatter: None,
			text: Some("Login".into()),
		}),
		LoginForm(),
	))
}

#[island]
fn LoginForm() -> impl IntoView {
	let session_resource = LocalResource::new(current_session);

	let email = RwSignal::new(String::new());
	let password = RwSignal::new(String::new());
	let error = RwSignal::new(Option::<String>::None);
	let is_loading = RwSignal::new(false);

	let on_submit = move |e: web_sys::SubmitEvent| {
		e.prevent_default();
		is_loading.set(true);
		error.set(None);

		let email_val = email.get();
		let password_val = password.get();

		wasm_bindgen_futures::spawn_local(async move {
			match sign_in(email_val, password_val).await {
				Ok(_) =>
					if let Some(window) = web_sys::window() {
						let _ = window.location().set_href("/main");
					},
				Err(e) => {
					let msg = format!("{}", e);
					let clean_msg = if msg.contains("Invalid email or password") {
						"Invalid email or password".to_string()
					} else {
						"Login failed. Please try again.".to_string()
					};
					error.set(Some(clean_msg));
					is_loading.set(false);
				}
			}
		});
	};

	move || {
		match session_resource.get().map(|w| w.take()) {
			None => div().class("text-center").child("Loading...").into_any(),
			Some(Ok(Some(_session))) => {
				// Already logged in - back to the dashboard
				Effect::new(move |_| {
					if let Some(window) = web_sys::window() {
						let _ = window.location().set_href("/main");
					}
				});
				div().class("text-center").child("Already logged in, redirecting...").into_any()
			}
			Some(Ok(None)) | Some(Err(_)) => form()
				.on(ev::submit, on_submit)
				.child((
					h1().class("text-2xl font-bold mb-6 text-center").child("Login"),
					// Error message
					move || error.get().map(|e| div().class("bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4").child(e)),
					div().class("mb-4").child((
						label().class("block text-gray-700 text-sm font-bold mb-2").attr("for", "email").child("Email"),
						input()
							.attr("type", "email")
							.attr("id", "email")
							.attr("required", "")
							.attr("placeholder", "you@example.com")
							.class("w-full px-3 py-2 border border-gray-300 rounded focus:outline-none focus:border-blue-500")
							.prop("value", move || email.get())
							.on(ev::input, move |e| {
								let val = event_target_value(&e);
								email.set(val);
							}),
					)),
					div().class("mb-6").child((
						label().class("block text-gray-700 text-sm font-bold mb-2").attr("for", "password").child("Password"),
						input()
							.attr("type", "password")
							.attr("id", "password")
							.attr("required", "")
							.attr("placeholder", "••••••••")
							.class("w-full px-3 py-2 border border-gray-300 rounded focus:outline-none focus:border-blue-500")
							.prop("value", move || password.get())
							.on(ev::input, move |e| {
								let val = event_target_value(&e);
								password.set(val);
							}),
					)),
					button()
						.attr("type", "submit")
						.attr("disabled", move || is_loading.get())
						.class("w-full bg-blue-500 text-white py-2 px-4 rounded hover:bg-blue-600 transition-colors disabled:opacity-50")
						.child(move || if is_loading.get() { "Loading..." } else { "Login" }),
					div().class("mt-4 text-center").child(
						a().attr("href", "/signup").class("text-blue-500 hover:underline").child("Don't have an account? Sign up"),
					),
				))
				.into_any(),
		}
	}
}

#[component]
pub fn NotFoundView() -> impl IntoView {
	div().class("p-4 text-center").child((
		h1().class("text-2xl font-bold").child("404: Not Found"),
		p().child("Sorry, we can't find that page"),
		A(AProps {
			href: "/main".to_string(),
			children: Box::new(|| view! { "Go Home" }.into_any()),
			target: None,
			exact: false,
			strict_trailing_slash: false,
			scroll: true,
		})
		.attr("class", "inline-block px-4 py-2 bg-green-500 text-white rounded mt-4"),
	))
}

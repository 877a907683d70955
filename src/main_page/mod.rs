mod calendar;
mod sticker;

use calendar::Calendar;
use leptos::{ev, html::*, prelude::*};
use leptos_meta::{Title, TitleProps};
use leptos_routable::prelude::*;
use leptos_router::{
	components::{A, Outlet},
	hooks::use_location,
};
use sticker::StickerStatus;

use crate::{
	app::AppRoutes,
	session::{AuthEvent, BrowserNavigator, Navigator as _, ProfileSource, SessionResolver},
};

#[derive(Routable)]
#[routes(transition = false)]
pub enum Routes {
	#[route(path = "")]
	Home,
	#[route(path = "/step1")]
	Step1,
	#[route(path = "/report")]
	Report,
	#[route(path = "/information")]
	Information,
	#[route(path = "/introduction")]
	Introduction,
	#[route(path = "/signout")]
	SignOut,

	#[fallback]
	#[route(path = "/404")]
	NotFound,
}

// boilerplate {{{
#[component]
pub fn MainView() -> impl IntoView {
	view! { <Outlet /> }
}

#[component]
fn NotFoundView() -> impl IntoView {
	let loc = use_location();
	view! {
		<section class="p-4 text-center">
			<h1 class="text-2xl font-bold">"Page Not Found"</h1>
			<p>{move || format!("Path: {}", loc.pathname.get())}</p>
			<A href=AppRoutes::Main(Routes::Home) attr:class="inline-block px-4 py-2 bg-blue-500 text-white rounded mt-2">
				"Back to Dashboard"
			</A>
		</section>
	}
}
//,}}}

#[component]
fn HomeView() -> impl IntoView {
	div().class("flex flex-col min-h-screen items-center").child((
		Title(TitleProps {
			formatter: None,
			text: Some("Look and Learn".into()),
		}),
		MainHeader(),
		div().class("max-w-2xl mx-auto mt-3 w-full px-4 mb-16").child((
			Calendar(),
			div().class("flex flex-col md:flex-row gap-4 w-full mt-4").child((
				div().class("w-full md:w-2/3").child(StickerStatus()),
				div().class("w-full md:w-1/3 flex flex-col gap-4").child(explore_panel()),
			)),
		)),
	))
}

/// Fetches profiles through the `fetch_profile` server fn.
struct ServerProfiles;

impl ProfileSource for ServerProfiles {
	async fn fetch_profile(&self, uid: &str) -> Result<Option<crate::backend::UserProfile>, String> {
		crate::app::fetch_profile(uid.to_owned()).await.map_err(|e| e.to_string())
	}
}

/// Header of the authenticated dashboard: greets by profile name, falls back
/// to a guest greeting, bounces signed-out visitors to the login surface.
#[island]
fn MainHeader() -> impl IntoView {
	let session_resource = LocalResource::new(crate::app::current_session);

	let resolver = StoredValue::new(SessionResolver::new());
	let display_name = RwSignal::new(Option::<String>::None);
	let loading = RwSignal::new(true);
	let is_dropdown_open = RwSignal::new(false);

	// One auth-state event per resource resolution. The island's reactive
	// scope is disposed on unmount; `try_set` makes a late fetch a no-op
	// instead of a write into defunct state.
	Effect::new(move |_| {
		if let Some(result) = session_resource.get() {
			let event = match result.take() {
				Ok(Some(session)) => AuthEvent::SignedIn(session),
				Ok(None) | Err(_) => AuthEvent::SignedOut,
			};
			wasm_bindgen_futures::spawn_local(async move {
				let mut r = resolver.get_value();
				r.on_event(event, &ServerProfiles, &BrowserNavigator).await;
				let _ = display_name.try_set(r.profile().map(|p| p.name.clone()));
				let _ = loading.try_set(r.loading());
				resolver.set_value(r);
			});
		}
	});

	header().class("w-full px-4 py-2").child(
		div().class("w-full max-w-2xl mx-auto flex justify-between items-center mt-3").child((
			div().class("h-10 flex items-center").child(span().class("text-2xl font-bold text-[#7BA4D9]").child("Look and Learn")),
			div().class("relative flex items-center space-x-2").child((
				span().class("mr-2 text-gray-800").child(move || {
					if loading.get() {
						"...".to_owned()
					} else {
						match display_name.get() {
							Some(name) => name,
							None => "Guest".to_owned(),
						}
					}
				}),
				div().class("relative").child((
					button()
						.attr("type", "button")
						.class("w-8 h-8 flex items-center justify-center cursor-pointer rounded hover:bg-gray-200")
						.on(ev::click, move |_| is_dropdown_open.update(|open| *open = !*open))
						.child("☰"),
					move || {
						is_dropdown_open.get().then(|| {
							div().class("absolute right-0 mt-2 w-40 bg-white rounded-md shadow-lg z-10").child((
								dropdown_item("View report", "/main/report", is_dropdown_open),
								dropdown_item("Sign out", "/main/signout", is_dropdown_open),
							))
						})
					},
				)),
			)),
		)),
	)
}

fn dropdown_item(label: &'static str, path: &'static str, is_open: RwSignal<bool>) -> impl IntoView {
	button()
		.attr("type", "button")
		.class("block px-4 py-2 text-sm text-gray-700 hover:bg-gray-100 w-full text-left")
		.on(ev::click, move |_| {
			is_open.set(false);
			BrowserNavigator.navigate(path);
		})
		.child(label)
}

fn explore_panel() -> impl IntoView {
	fn explore_link(label: &'static str, href: &'static str) -> impl IntoView {
		a().attr("href", href)
			.class("block bg-blue-500 text-white text-center font-semibold py-3 px-4 rounded hover:bg-blue-700 transition duration-300 w-full")
			.child(label)
	}

	div().class("bg-white rounded-xl shadow-lg p-4 w-full h-full flex flex-col").child((
		h3().class("text-lg font-semibold text-center mb-2").child("Explore"),
		div().class("flex flex-col gap-4 flex-grow justify-center").child((
			explore_link("Learning report", "/main/report"),
			explore_link("Learning resources", "/main/information"),
			explore_link("About the service", "/main/introduction"),
		)),
	))
}

#[component]
fn Step1View() -> impl IntoView {
	section().class("p-4 max-w-2xl mx-auto mt-8 text-center").child((
		Title(TitleProps {
			formatter: None,
			text: Some("Today's Session".into()),
		}),
		h1().class("text-2xl font-bold mb-4").child("Today's learning session"),
		p().class("text-gray-600 mb-4").child("Start today's session to earn your sticker."),
		back_to_dashboard(),
	))
}

#[component]
fn ReportView() -> impl IntoView {
	section().class("p-4 max-w-2xl mx-auto mt-8 text-center").child((
		Title(TitleProps {
			formatter: None,
			text: Some("Report".into()),
		}),
		h1().class("text-2xl font-bold mb-4").child("Learning statistics report"),
		p().class("text-gray-600 mb-4").child("Your learning statistics will appear here."),
		back_to_dashboard(),
	))
}

#[component]
fn InformationView() -> impl IntoView {
	section().class("p-4 max-w-2xl mx-auto mt-8 text-center").child((
		Title(TitleProps {
			formatter: None,
			text: Some("Resources".into()),
		}),
		h1().class("text-2xl font-bold mb-4").child("Learning resources"),
		p().class("text-gray-600 mb-4").child("Curated learning material for your level."),
		back_to_dashboard(),
	))
}

#[component]
fn IntroductionView() -> impl IntoView {
	section().class("p-4 max-w-2xl mx-auto mt-8 text-center").child((
		Title(TitleProps {
			formatter: None,
			text: Some("About".into()),
		}),
		h1().class("text-2xl font-bold mb-4").child("About Look and Learn"),
		p().class("text-gray-600 mb-4").child("Build a daily learning habit: one session, one sticker, one streak."),
		back_to_dashboard(),
	))
}

fn back_to_dashboard() -> impl IntoView {
	a().attr("href", "/main")
		.class("inline-block px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600")
		.child("Back to dashboard")
}

#[component]
fn SignOutView() -> impl IntoView {
	section().class("p-4 max-w-md mx-auto mt-8").child((
		Title(TitleProps {
			formatter: None,
			text: Some("Sign Out".into()),
		}),
		SignOutAction(),
	))
}

#[island]
fn SignOutAction() -> impl IntoView {
	Effect::new(move |_| {
		wasm_bindgen_futures::spawn_local(async move {
			let _ = crate::app::sign_out().await;
			BrowserNavigator.navigate(crate::session::LOGIN_PATH);
		});
	});

	div().class("text-center").child("Signing out...")
}

mod draft;

pub use draft::{SignUpDraft, SignUpField};
use leptos::{ev, html::*, prelude::*};
use leptos_meta::{Title, TitleProps};
use leptos_routable::prelude::*;
use leptos_router::components::Outlet;

use crate::session::{BrowserNavigator, Navigator as _};

pub const SCORE_PATH: &str = "/signup/score";

#[derive(Routable)]
#[routes(transition = false)]
pub enum Routes {
	#[route(path = "")]
	Home,
	#[route(path = "/score")]
	Score,

	#[fallback]
	#[route(path = "/404")]
	NotFound,
}

// boilerplate {{{
#[component]
pub fn SignUpView() -> impl IntoView {
	view! { <Outlet /> }
}

#[component]
fn NotFoundView() -> impl IntoView {
	section().class("p-4 text-center").child((
		h1().class("text-2xl font-bold").child("Signup Step Not Found"),
		a().attr("href", "/signup")
			.class("inline-block px-4 py-2 bg-blue-500 text-white rounded mt-2")
			.child("Back to Sign Up"),
	))
}
//,}}}

#[component]
fn HomeView() -> impl IntoView {
	section().class("flex flex-col items-center justify-center min-h-screen bg-gray-50 p-4").child((
		Title(TitleProps {
			formatter: None,
			text: Some("Sign Up".into()),
		}),
		div().class("w-full max-w-md space-y-6").child((
			div()
				.class("text-center mb-8")
				.child(h1().class("text-3xl font-bold text-[#7BA4D9]").child(("Look", br(), "and Learn"))),
			SignUpForm(),
		)),
	))
}

/// First step of the signup wizard: collect the draft, hand off to the score
/// step. No validation and no network call here — the draft only mirrors the
/// inputs until a later step submits it.
#[island]
fn SignUpForm() -> impl IntoView {
	let draft = RwSignal::new(SignUpDraft::default());

	let on_submit = move |e: web_sys::SubmitEvent| {
		e.prevent_default();
		BrowserNavigator.navigate(SCORE_PATH);
	};

	fn text_input(
		draft: RwSignal<SignUpDraft>,
		field: SignUpField,
		label_text: &'static str,
		input_type: &'static str,
		placeholder: &'static str,
		value: impl Fn() -> String + Send + Sync + 'static,
	) -> impl IntoView {
		div().child((
			label().class("block text-sm text-gray-600 mb-1").child(label_text),
			input()
				.attr("type", input_type)
				.attr("placeholder", placeholder)
				.class("w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-1 focus:ring-[#7BA4D9]")
				.prop("value", value)
				.on(ev::input, move |e| {
					let val = event_target_value(&e);
					draft.update(|d| d.set_text(field, val));
				}),
		))
	}

	form().class("space-y-4").on(ev::submit, on_submit).child((
		text_input(draft, SignUpField::Name, "Name", "text", "Your name", move || draft.read().name.clone()),
		text_input(draft, SignUpField::Email, "Email", "email", "you@example.com", move || draft.read().email.clone()),
		text_input(draft, SignUpField::BirthDate, "Birth date", "text", "8 digits, e.g. 20240101", move || {
			draft.read().birth_date.clone()
		}),
		text_input(draft, SignUpField::Password, "Password", "password", "Enter a password", move || draft.read().password.clone()),
		text_input(draft, SignUpField::PasswordConfirm, "Confirm password", "password", "Enter the password again", move || {
			draft.read().password_confirm.clone()
		}),
		div().class("flex items-center").child((
			input()
				.attr("type", "checkbox")
				.attr("id", "terms")
				.class("h-4 w-4 text-[#7BA4D9] focus:ring-[#7BA4D9] border-gray-300 rounded")
				.prop("checked", move || draft.read().terms_accepted)
				.on(ev::change, move |e| {
					let accepted = event_target_checked(&e);
					draft.update(|d| d.set_terms(accepted));
				}),
			label()
				.attr("for", "terms")
				.class("ml-2 text-sm text-gray-600")
				.child("I agree to the collection and use of my personal data"),
		)),
		button()
			.attr("type", "submit")
			.class("w-full py-2 px-4 bg-gray-200 text-gray-600 rounded-md hover:bg-gray-300 focus:outline-none focus:ring-2 focus:ring-gray-300 mt-6")
			.child("Next"),
	))
}

#[component]
fn ScoreView() -> impl IntoView {
	section().class("p-4 max-w-md mx-auto mt-8 text-center").child((
		Title(TitleProps {
			formatter: None,
			text: Some("Sign Up - Score".into()),
		}),
		h1().class("text-2xl font-bold mb-4").child("Placement score"),
		p().class("text-gray-600 mb-4").child("Tell us your current level so we can tailor your sessions."),
		a().attr("href", "/signup").class("text-blue-500 hover:underline").child("Back"),
	))
}

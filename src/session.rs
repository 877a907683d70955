//! Identity-state resolution for the authenticated dashboard.
//!
//! Each mounted view owns one [`SessionResolver`]. Every identity-state
//! change becomes an [`AuthEvent`]; the resolver either looks up the profile
//! record keyed by the authenticated identity or sends the visitor to the
//! login surface. Backends are injected through [`ProfileSource`] and
//! [`Navigator`] so the state machine runs the same against the live server
//! functions and against test doubles.

use crate::backend::UserProfile;

pub const LOGIN_PATH: &str = "/login";

/// One identity-state change, as observed by the mounted view.
#[derive(Clone, Debug)]
pub enum AuthEvent {
	SignedIn(crate::backend::Session),
	SignedOut,
}

/// Point lookup of the profile record keyed by an identity.
/// `Ok(None)` means the record does not exist.
pub trait ProfileSource {
	fn fetch_profile(&self, uid: &str) -> impl std::future::Future<Output = Result<Option<UserProfile>, String>>;
}

/// In-app navigation side effect.
pub trait Navigator {
	fn navigate(&self, path: &str);
}

/// Navigates via the browser location. No-op on the server.
pub struct BrowserNavigator;

#[cfg(not(feature = "ssr"))]
impl Navigator for BrowserNavigator {
	fn navigate(&self, path: &str) {
		if let Some(window) = web_sys::window() {
			let _ = window.location().set_href(path);
		}
	}
}

#[cfg(feature = "ssr")]
impl Navigator for BrowserNavigator {
	fn navigate(&self, _path: &str) {}
}

#[derive(Clone, Debug)]
pub struct SessionResolver {
	profile: Option<UserProfile>,
	loading: bool,
	signed_out: bool,
}

impl Default for SessionResolver {
	fn default() -> Self {
		Self::new()
	}
}

impl SessionResolver {
	pub fn new() -> Self {
		Self {
			profile: None,
			loading: true,
			signed_out: false,
		}
	}

	/// True from construction until the first event resolves, either branch.
	pub fn loading(&self) -> bool {
		self.loading
	}

	pub fn profile(&self) -> Option<&UserProfile> {
		self.profile.as_ref()
	}

	/// Process one identity-state change. Events are handled one at a time per
	/// resolver; the owning view drops the resolver on unmount, which cancels
	/// any in-flight lookup before it can write back.
	pub async fn on_event(&mut self, event: AuthEvent, profiles: &impl ProfileSource, nav: &impl Navigator) {
		match event {
			AuthEvent::SignedIn(session) => {
				self.signed_out = false;
				match profiles.fetch_profile(&session.uid).await {
					Ok(Some(profile)) => self.profile = Some(profile),
					// No record yet: keep the guest greeting, no navigation.
					Ok(None) => {}
					Err(e) => leptos::logging::error!("Error fetching user profile: {e}"),
				}
			}
			AuthEvent::SignedOut => {
				self.profile = None;
				// Navigate once per transition into the signed-out state.
				if !self.signed_out {
					self.signed_out = true;
					nav.navigate(LOGIN_PATH);
				}
			}
		}
		self.loading = false;
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use futures::executor::block_on;

	use super::*;
	use crate::backend::Session;

	struct StaticProfiles(Result<Option<UserProfile>, String>);

	impl ProfileSource for StaticProfiles {
		async fn fetch_profile(&self, _uid: &str) -> Result<Option<UserProfile>, String> {
			self.0.clone()
		}
	}

	#[derive(Default)]
	struct RecordingNav(RefCell<Vec<String>>);

	impl Navigator for RecordingNav {
		fn navigate(&self, path: &str) {
			self.0.borrow_mut().push(path.to_owned());
		}
	}

	fn signed_in() -> AuthEvent {
		AuthEvent::SignedIn(Session { uid: "u-1".to_owned() })
	}

	fn profile() -> UserProfile {
		UserProfile { name: "Ada".to_owned() }
	}

	#[test]
	fn existing_record_becomes_profile_state() {
		let mut resolver = SessionResolver::new();
		let nav = RecordingNav::default();
		block_on(resolver.on_event(signed_in(), &StaticProfiles(Ok(Some(profile()))), &nav));
		assert_eq!(resolver.profile(), Some(&profile()));
		assert!(nav.0.borrow().is_empty());
	}

	#[test]
	fn absent_record_leaves_profile_unset_without_navigation() {
		let mut resolver = SessionResolver::new();
		let nav = RecordingNav::default();
		block_on(resolver.on_event(signed_in(), &StaticProfiles(Ok(None)), &nav));
		assert_eq!(resolver.profile(), None);
		assert!(nav.0.borrow().is_empty());
	}

	#[test]
	fn fetch_error_is_swallowed() {
		let mut resolver = SessionResolver::new();
		let nav = RecordingNav::default();
		block_on(resolver.on_event(signed_in(), &StaticProfiles(Err("read failed".to_owned())), &nav));
		assert_eq!(resolver.profile(), None);
		assert!(nav.0.borrow().is_empty());
		assert!(!resolver.loading());
	}

	#[test]
	fn signed_out_navigates_to_login_once_per_transition() {
		let mut resolver = SessionResolver::new();
		let profiles = StaticProfiles(Ok(Some(profile())));
		let nav = RecordingNav::default();

		block_on(resolver.on_event(AuthEvent::SignedOut, &profiles, &nav));
		block_on(resolver.on_event(AuthEvent::SignedOut, &profiles, &nav));
		assert_eq!(*nav.0.borrow(), vec![LOGIN_PATH.to_owned()]);

		// Signing back in and out again is a fresh transition.
		block_on(resolver.on_event(signed_in(), &profiles, &nav));
		block_on(resolver.on_event(AuthEvent::SignedOut, &profiles, &nav));
		assert_eq!(nav.0.borrow().len(), 2);
		assert_eq!(resolver.profile(), None);
	}

	#[test]
	fn loading_clears_on_first_event_of_either_branch() {
		let nav = RecordingNav::default();

		let mut resolver = SessionResolver::new();
		assert!(resolver.loading());
		block_on(resolver.on_event(AuthEvent::SignedOut, &StaticProfiles(Ok(None)), &nav));
		assert!(!resolver.loading());

		let mut resolver = SessionResolver::new();
		block_on(resolver.on_event(signed_in(), &StaticProfiles(Err("boom".to_owned())), &nav));
		assert!(!resolver.loading());
	}
}

use serde::{Deserialize, Serialize};

/// In-memory draft of the signup form. One field mutated per change event,
/// siblings untouched; nothing here validates — the draft only mirrors the
/// current input state until the wizard's next step takes over.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignUpDraft {
	pub name: String,
	pub email: String,
	pub birth_date: String,
	pub password: String,
	pub password_confirm: String,
	pub terms_accepted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignUpField {
	Name,
	Email,
	BirthDate,
	Password,
	PasswordConfirm,
}

impl SignUpDraft {
	pub fn set_text(&mut self, field: SignUpField, value: String) {
		match field {
			SignUpField::Name => self.name = value,
			SignUpField::Email => self.email = value,
			SignUpField::BirthDate => self.birth_date = value,
			SignUpField::Password => self.password = value,
			SignUpField::PasswordConfirm => self.password_confirm = value,
		}
	}

	pub fn set_terms(&mut self, accepted: bool) {
		self.terms_accepted = accepted;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled() -> SignUpDraft {
		SignUpDraft {
			name: "Ada".to_owned(),
			email: "ada@example.com".to_owned(),
			birth_date: "20240101".to_owned(),
			password: "hunter2".to_owned(),
			password_confirm: "hunter2".to_owned(),
			terms_accepted: true,
		}
	}

	fn text_field(draft: &SignUpDraft, field: SignUpField) -> &str {
		match field {
			SignUpField::Name => &draft.name,
			SignUpField::Email => &draft.email,
			SignUpField::BirthDate => &draft.birth_date,
			SignUpField::Password => &draft.password,
			SignUpField::PasswordConfirm => &draft.password_confirm,
		}
	}

	#[test]
	fn text_update_touches_exactly_one_field() {
		for field in [SignUpField::Name, SignUpField::Email, SignUpField::BirthDate, SignUpField::Password, SignUpField::PasswordConfirm] {
			let before = filled();
			let mut draft = filled();
			draft.set_text(field, "changed".to_owned());
			assert_eq!(text_field(&draft, field), "changed");

			// Restoring the one field restores the whole draft, so the
			// siblings were byte-identical all along.
			draft.set_text(field, text_field(&before, field).to_owned());
			assert_eq!(draft, before);
		}
	}

	#[test]
	fn terms_toggle_leaves_text_fields_untouched() {
		let mut draft = filled();
		draft.set_terms(false);
		assert!(!draft.terms_accepted);
		assert_eq!(
			SignUpDraft {
				terms_accepted: true,
				..draft.clone()
			},
			filled()
		);
	}

	#[test]
	fn draft_starts_empty() {
		let draft = SignUpDraft::default();
		assert_eq!(draft, SignUpDraft {
			name: String::new(),
			email: String::new(),
			birth_date: String::new(),
			password: String::new(),
			password_confirm: String::new(),
			terms_accepted: false,
		});
	}
}

#[cfg(feature = "ssr")]
mod identity;
#[cfg(feature = "ssr")]
pub use identity::*;

#[cfg(feature = "ssr")]
mod store;
#[cfg(feature = "ssr")]
pub use store::*;

use serde::{Deserialize, Serialize};

/// An authenticated identity, as handed to the client by the identity
/// provider. The session token itself stays in the HttpOnly cookie.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Session {
	pub uid: String,
}

/// The per-user profile record. Fetched from the document store, never
/// mutated by this client.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserProfile {
	pub name: String,
}

#[cfg(feature = "ssr")]
impl UserProfile {
	/// Parse the document store's untyped field bag into a typed profile.
	/// Extra fields are tolerated; a record without a string `name` is
	/// malformed.
	pub fn from_fields(fields: &serde_json::Map<String, serde_json::Value>) -> color_eyre::eyre::Result<Self> {
		let name = fields
			.get("name")
			.and_then(|v| v.as_str())
			.ok_or_else(|| color_eyre::eyre::eyre!("malformed profile record: missing string field 'name'"))?;
		Ok(Self { name: name.to_owned() })
	}
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
	use serde_json::json;

	use super::*;

	fn fields(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
		value.as_object().expect("test fixture must be an object").clone()
	}

	#[test]
	fn parses_name_from_field_bag() {
		let profile = UserProfile::from_fields(&fields(json!({ "name": "Ada" }))).unwrap();
		assert_eq!(profile.name, "Ada");
	}

	#[test]
	fn tolerates_extra_fields() {
		let bag = fields(json!({ "name": "Ada", "birthDate": "20240101", "streak": 4 }));
		let profile = UserProfile::from_fields(&bag).unwrap();
		assert_eq!(profile, UserProfile { name: "Ada".to_owned() });
	}

	#[test]
	fn rejects_record_without_name() {
		assert!(UserProfile::from_fields(&fields(json!({ "email": "a@b.c" }))).is_err());
		// Wrong type counts as missing.
		assert!(UserProfile::from_fields(&fields(json!({ "name": 7 }))).is_err());
	}
}

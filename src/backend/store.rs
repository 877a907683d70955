use color_eyre::eyre::{Context, Result, eyre};
use serde_json::{Map, Value};

use crate::config::BackendConfig;

/// Thin REST client for the hosted document database. Supports exactly what
/// this site needs: point lookup by collection name + document key.
#[derive(Clone)]
pub struct DocStore {
	http: reqwest::Client,
	base: String,
}

impl std::fmt::Debug for DocStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DocStore").field("base", &self.base).finish()
	}
}

impl DocStore {
	pub fn new(config: &BackendConfig) -> Self {
		Self {
			http: reqwest::Client::new(),
			base: format!("https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents", config.project_id),
		}
	}

	/// Fetch one document. `Ok(None)` when the record does not exist;
	/// the field bag comes back with the wire-level type tags stripped.
	pub async fn get_document(&self, collection: &str, key: &str) -> Result<Option<Map<String, Value>>> {
		let response = self
			.http
			.get(format!("{}/{collection}/{key}", self.base))
			.send()
			.await
			.context("Failed to reach document store")?;

		if response.status() == reqwest::StatusCode::NOT_FOUND {
			return Ok(None);
		}
		let response = response.error_for_status().context("Document store rejected read")?;
		let body: Value = response.json().await.context("Failed to parse document response")?;

		let fields = match body.get("fields") {
			Some(Value::Object(fields)) => fields.clone(),
			// A document that exists but holds no fields is still a hit.
			None => Map::new(),
			Some(other) => return Err(eyre!("unexpected 'fields' shape in document response: {other}")),
		};
		Ok(Some(flatten_fields(fields)))
	}
}

/// The document API wraps every value in a type tag, e.g.
/// `{"name": {"stringValue": "Ada"}}`. Strip the tags so callers see a plain
/// field bag.
fn flatten_fields(fields: Map<String, Value>) -> Map<String, Value> {
	fields.into_iter().map(|(k, v)| (k, flatten_value(v))).collect()
}

fn flatten_value(value: Value) -> Value {
	let Value::Object(mut tagged) = value else { return value };
	if let Some(s) = tagged.get("stringValue").and_then(Value::as_str) {
		return Value::String(s.to_owned());
	}
	if let Some(b) = tagged.get("booleanValue").and_then(Value::as_bool) {
		return Value::Bool(b);
	}
	// Integers come through as decimal strings on the wire.
	if let Some(i) = tagged.get("integerValue").and_then(|v| v.as_str().and_then(|s| s.parse::<i64>().ok())) {
		return Value::from(i);
	}
	if let Some(f) = tagged.get("doubleValue").and_then(Value::as_f64) {
		return Value::from(f);
	}
	if tagged.contains_key("nullValue") {
		return Value::Null;
	}
	if let Some(Value::Object(map)) = tagged.remove("mapValue") {
		if let Some(Value::Object(inner)) = map.get("fields").cloned() {
			return Value::Object(flatten_fields(inner));
		}
		return Value::Object(Map::new());
	}
	// Unknown tag: hand it through untouched rather than guessing.
	Value::Object(tagged)
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn strips_wire_type_tags() {
		let fields = json!({
			"name": { "stringValue": "Ada" },
			"termsAccepted": { "booleanValue": true },
			"streak": { "integerValue": "12" },
		});
		let Value::Object(fields) = fields else { unreachable!() };
		let flat = flatten_fields(fields);
		assert_eq!(flat.get("name"), Some(&json!("Ada")));
		assert_eq!(flat.get("termsAccepted"), Some(&json!(true)));
		assert_eq!(flat.get("streak"), Some(&json!(12)));
	}

	#[test]
	fn flattens_nested_maps() {
		let fields = json!({
			"settings": { "mapValue": { "fields": { "theme": { "stringValue": "light" } } } },
		});
		let Value::Object(fields) = fields else { unreachable!() };
		let flat = flatten_fields(fields);
		assert_eq!(flat.get("settings"), Some(&json!({ "theme": "light" })));
	}
}

//! Describing a response type to the model.
//!
//! The model is not a reliable JSON emitter. Showing it an empty instance of
//! the expected type, with every key present, is the cheapest way to get the
//! field names right. [`describe_shape`] builds that example from
//! `T::default()` and cross-checks it against the JSON Schema derived with
//! [`schemars`] so a field silently dropped during serialization is caught
//! before any request goes out.

use schemars::{
    JsonSchema,
    r#gen::{SchemaGenerator, SchemaSettings},
};
use serde::Serialize;
use serde_json::{self, Value};

use crate::error::{HilalError, Result};

/// Generate a JSON Schema for `T` **inline**, i.e. without `$ref` pointers
/// to external definitions.
///
/// # Errors
///
/// [`HilalError::ShapeDescription`] if the generated schema cannot be
/// serialized into JSON.
///
/// ```
/// use hilal_core::shape::derive_response_schema;
/// use schemars::JsonSchema;
///
/// #[derive(JsonSchema)]
/// struct Foo { bar: String }
///
/// let schema = derive_response_schema::<Foo>().unwrap();
/// assert!(schema["properties"]["bar"].is_object());
/// ```
pub fn derive_response_schema<T>() -> Result<Value>
where
    T: JsonSchema,
{
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = SchemaGenerator::new(settings);
    let root = generator.into_root_schema_for::<T>();

    serde_json::to_value(root).map_err(|err| {
        HilalError::ShapeDescription(format!("schema is not serialisable: {err}"))
    })
}

/// Produce the compact JSON example for `T`: its default value with every
/// declared field present.
///
/// # Errors
///
/// [`HilalError::ShapeDescription`] when the default instance does not
/// serialize, is not a JSON object, or lacks a property the schema declares.
///
/// ```
/// use hilal_core::shape::describe_shape;
/// use schemars::JsonSchema;
/// use serde::Serialize;
///
/// #[derive(Default, Serialize, JsonSchema)]
/// struct Verse { surah: String, ayat: String }
///
/// assert_eq!(describe_shape::<Verse>().unwrap(), r#"{"surah":"","ayat":""}"#);
/// ```
pub fn describe_shape<T>() -> Result<String>
where
    T: Default + Serialize + JsonSchema,
{
    let not_serialisable = |err: serde_json::Error| {
        HilalError::ShapeDescription(format!(
            "default `{}` is not serialisable: {err}",
            T::schema_name()
        ))
    };

    // Text keeps declaration order; the value is only used for validation.
    let instance = T::default();
    let text = serde_json::to_string(&instance).map_err(not_serialisable)?;
    let example = serde_json::to_value(&instance).map_err(not_serialisable)?;

    let Value::Object(fields) = &example else {
        return Err(HilalError::ShapeDescription(format!(
            "default `{}` must serialize to a JSON object, got `{example}`",
            T::schema_name()
        )));
    };

    let schema = derive_response_schema::<T>()?;
    if let Some(declared) = schema.get("properties").and_then(Value::as_object) {
        let missing: Vec<&str> = declared
            .keys()
            .filter(|key| !fields.contains_key(key.as_str()))
            .map(String::as_str)
            .collect();

        if !missing.is_empty() {
            return Err(HilalError::ShapeDescription(format!(
                "default `{}` omits declared fields: {}",
                T::schema_name(),
                missing.join(", ")
            )));
        }
    }

    Ok(text)
}

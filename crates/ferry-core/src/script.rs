//! Read-only named fields handed to post-migration scripts.
//!
//! Scripts see effects as plain JSON objects. Field names and nullability
//! match the record: `destination_ref` and `url` are `null` when absent,
//! sequences keep their order.

use crate::change::Change;
use crate::effect::{DestinationEffect, DestinationRef};
use crate::error::EffectError;
use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;

pub const EFFECT_FIELDS: [&str; 5] = [
    "type",
    "summary",
    "origin_refs",
    "destination_ref",
    "errors",
];
pub const DESTINATION_REF_FIELDS: [&str; 3] = ["id", "type", "url"];
pub const CHANGE_FIELDS: [&str; 7] = [
    "ref",
    "author",
    "message",
    "first_line_message",
    "date_time_iso_offset",
    "labels",
    "merge",
];

impl DestinationEffect {
    /// Look up one scripting field by name.
    pub fn field(&self, name: &str) -> Result<Value, EffectError> {
        let value = match name {
            "type" => Value::String(self.effect_type().as_str().to_string()),
            "summary" => Value::String(self.summary().to_string()),
            "origin_refs" => Value::Array(self.origin_refs().iter().map(change_fields).collect()),
            "destination_ref" => self
                .destination_ref()
                .map(DestinationRef::script_fields)
                .unwrap_or(Value::Null),
            "errors" => json!(self.errors()),
            other => {
                return Err(EffectError::UnknownField {
                    object: "destination_effect",
                    field: other.to_string(),
                })
            }
        };
        Ok(value)
    }

    /// All scripting fields as one object.
    pub fn script_fields(&self) -> Value {
        json!({
            "type": self.effect_type().as_str(),
            "summary": self.summary(),
            "origin_refs": self.origin_refs().iter().map(change_fields).collect::<Vec<_>>(),
            "destination_ref": self.destination_ref().map(DestinationRef::script_fields),
            "errors": self.errors(),
        })
    }
}

impl DestinationRef {
    pub fn field(&self, name: &str) -> Result<Value, EffectError> {
        match name {
            "id" => Ok(Value::String(self.id().to_string())),
            "type" => Ok(Value::String(self.ref_type().to_string())),
            "url" => Ok(self.url().map(|u| Value::String(u.to_string())).unwrap_or(Value::Null)),
            other => Err(EffectError::UnknownField {
                object: "destination_ref",
                field: other.to_string(),
            }),
        }
    }

    pub fn script_fields(&self) -> Value {
        json!({
            "id": self.id(),
            "type": self.ref_type(),
            "url": self.url(),
        })
    }
}

fn change_fields(change: &Change) -> Value {
    // Years outside 0..=9999 have no RFC 3339 form.
    let date = change.date().format(&Rfc3339).ok();
    json!({
        "ref": change.revision().id(),
        "author": change.author().to_string(),
        "message": change.message(),
        "first_line_message": change.first_line_message(),
        "date_time_iso_offset": date,
        "labels": change.labels(),
        "merge": change.is_merge(),
    })
}

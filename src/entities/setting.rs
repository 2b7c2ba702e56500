//! Key/value settings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::Resource;
use crate::core::schema::{EntitySchema, FieldKind, FieldSpec};

/// A configuration entry. `updated_at` is re-stamped by the server on
/// every update, whatever the patch contains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    pub setting_id: i64,
    pub key_name: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /setting/`
#[derive(Debug, Clone, Deserialize)]
pub struct NewSetting {
    pub key_name: String,
    pub value: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for `PUT /setting/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingPatch {
    pub key_name: Option<String>,
    pub value: Option<String>,
}

pub(crate) const SCHEMA: EntitySchema = EntitySchema {
    singular: "setting",
    plural: "settings",
    fields: &[
        FieldSpec::id("setting_id"),
        FieldSpec::required("key_name", FieldKind::String),
        FieldSpec::required("value", FieldKind::String),
        FieldSpec::timestamp("updated_at"),
    ],
};

impl Resource for Setting {
    type Create = NewSetting;
    type Patch = SettingPatch;

    fn resource_name() -> &'static str {
        "setting"
    }

    fn schema() -> &'static EntitySchema {
        &SCHEMA
    }

    fn id(&self) -> i64 {
        self.setting_id
    }

    fn from_create(id: i64, input: NewSetting) -> Self {
        Self {
            setting_id: id,
            key_name: input.key_name,
            value: input.value,
            updated_at: input.updated_at.unwrap_or_else(Utc::now),
        }
    }

    fn apply_patch(&mut self, patch: SettingPatch) {
        if let Some(key_name) = patch.key_name {
            self.key_name = key_name;
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
        self.updated_at = Utc::now();
    }
}

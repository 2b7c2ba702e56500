//! Client records and payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::Resource;
use crate::core::schema::{EntitySchema, FieldKind, FieldSpec};

/// A customer of the workshop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub client_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /client/`
#[derive(Debug, Clone, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `PUT /client/{id}`; absent fields keep their value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

pub(crate) const SCHEMA: EntitySchema = EntitySchema {
    singular: "client",
    plural: "clients",
    fields: &[
        FieldSpec::id("client_id"),
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("email", FieldKind::String),
        FieldSpec::required("phone", FieldKind::String),
        FieldSpec::required("address", FieldKind::String),
        FieldSpec::timestamp("created_at"),
    ],
};

impl Resource for Client {
    type Create = NewClient;
    type Patch = ClientPatch;

    fn resource_name() -> &'static str {
        "client"
    }

    fn schema() -> &'static EntitySchema {
        &SCHEMA
    }

    fn id(&self) -> i64 {
        self.client_id
    }

    fn from_create(id: i64, input: NewClient) -> Self {
        Self {
            client_id: id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            address: input.address,
            created_at: input.created_at.unwrap_or_else(Utc::now),
        }
    }

    fn apply_patch(&mut self, patch: ClientPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
    }
}

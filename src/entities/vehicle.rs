//! Vehicle records and payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::Resource;
use crate::core::schema::{EntitySchema, FieldKind, FieldSpec};

/// A vehicle brought in by a client.
///
/// The license plate is declared unique in the schema document but not
/// enforced by the service layer, and `client_id` is stored without an
/// existence check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub vehicle_id: i64,
    pub brand: String,
    pub model: String,
    pub license_plate: String,
    pub year: i64,
    pub client_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /vehicle/`
#[derive(Debug, Clone, Deserialize)]
pub struct NewVehicle {
    pub brand: String,
    pub model: String,
    pub license_plate: String,
    pub year: i64,
    pub client_id: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `PUT /vehicle/{id}`; absent fields keep their value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehiclePatch {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub license_plate: Option<String>,
    pub year: Option<i64>,
    pub client_id: Option<i64>,
}

pub(crate) const SCHEMA: EntitySchema = EntitySchema {
    singular: "vehicle",
    plural: "vehicles",
    fields: &[
        FieldSpec::id("vehicle_id"),
        FieldSpec::required("brand", FieldKind::String),
        FieldSpec::required("model", FieldKind::String),
        FieldSpec::required("license_plate", FieldKind::String),
        FieldSpec::required("year", FieldKind::Integer),
        FieldSpec::required("client_id", FieldKind::Integer),
        FieldSpec::timestamp("created_at"),
    ],
};

impl Resource for Vehicle {
    type Create = NewVehicle;
    type Patch = VehiclePatch;

    fn resource_name() -> &'static str {
        "vehicle"
    }

    fn schema() -> &'static EntitySchema {
        &SCHEMA
    }

    fn id(&self) -> i64 {
        self.vehicle_id
    }

    fn from_create(id: i64, input: NewVehicle) -> Self {
        Self {
            vehicle_id: id,
            brand: input.brand,
            model: input.model,
            license_plate: input.license_plate,
            year: input.year,
            client_id: input.client_id,
            created_at: input.created_at.unwrap_or_else(Utc::now),
        }
    }

    fn apply_patch(&mut self, patch: VehiclePatch) {
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(model) = patch.model {
            self.model = model;
        }
        if let Some(license_plate) = patch.license_plate {
            self.license_plate = license_plate;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(client_id) = patch.client_id {
            self.client_id = client_id;
        }
    }
}

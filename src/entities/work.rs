//! Work order records and payloads

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::Resource;
use crate::core::schema::{EntitySchema, FieldKind, FieldSpec};

/// A work order opened on a vehicle.
///
/// Cost, end date and status are unknown when a job is opened, so they
/// stay optional on the record itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Work {
    pub work_id: i64,
    pub cost: Option<f64>,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub vehicle_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /work/`
#[derive(Debug, Clone, Deserialize)]
pub struct NewWork {
    #[serde(default)]
    pub cost: Option<f64>,
    pub description: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
    pub vehicle_id: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `PUT /work/{id}`; absent fields keep their value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkPatch {
    pub cost: Option<f64>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub vehicle_id: Option<i64>,
}

pub(crate) const SCHEMA: EntitySchema = EntitySchema {
    singular: "work",
    plural: "works",
    fields: &[
        FieldSpec::id("work_id"),
        FieldSpec::optional("cost", FieldKind::Float),
        FieldSpec::required("description", FieldKind::String),
        FieldSpec::required("start_date", FieldKind::Date),
        FieldSpec::optional("end_date", FieldKind::Date),
        FieldSpec::optional("status", FieldKind::String),
        FieldSpec::required("vehicle_id", FieldKind::Integer),
        FieldSpec::timestamp("created_at"),
    ],
};

impl Resource for Work {
    type Create = NewWork;
    type Patch = WorkPatch;

    fn resource_name() -> &'static str {
        "work"
    }

    fn schema() -> &'static EntitySchema {
        &SCHEMA
    }

    fn id(&self) -> i64 {
        self.work_id
    }

    fn from_create(id: i64, input: NewWork) -> Self {
        Self {
            work_id: id,
            cost: input.cost,
            description: input.description,
            start_date: input.start_date,
            end_date: input.end_date,
            status: input.status,
            vehicle_id: input.vehicle_id,
            created_at: input.created_at.unwrap_or_else(Utc::now),
        }
    }

    fn apply_patch(&mut self, patch: WorkPatch) {
        if let Some(cost) = patch.cost {
            self.cost = Some(cost);
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = Some(end_date);
        }
        if let Some(status) = patch.status {
            self.status = Some(status);
        }
        if let Some(vehicle_id) = patch.vehicle_id {
            self.vehicle_id = vehicle_id;
        }
    }
}

//! Employee records and payloads

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::Resource;
use crate::core::schema::{EntitySchema, FieldKind, FieldSpec};

/// A workshop employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub hired_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /employee/`
#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub hired_date: NaiveDate,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `PUT /employee/{id}`; absent fields keep their value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub hired_date: Option<NaiveDate>,
}

pub(crate) const SCHEMA: EntitySchema = EntitySchema {
    singular: "employee",
    plural: "employees",
    fields: &[
        FieldSpec::id("employee_id"),
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("email", FieldKind::String),
        FieldSpec::required("phone", FieldKind::String),
        FieldSpec::required("role", FieldKind::String),
        FieldSpec::required("hired_date", FieldKind::Date),
        FieldSpec::timestamp("created_at"),
    ],
};

impl Resource for Employee {
    type Create = NewEmployee;
    type Patch = EmployeePatch;

    fn resource_name() -> &'static str {
        "employee"
    }

    fn schema() -> &'static EntitySchema {
        &SCHEMA
    }

    fn id(&self) -> i64 {
        self.employee_id
    }

    fn from_create(id: i64, input: NewEmployee) -> Self {
        Self {
            employee_id: id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            role: input.role,
            hired_date: input.hired_date,
            created_at: input.created_at.unwrap_or_else(Utc::now),
        }
    }

    fn apply_patch(&mut self, patch: EmployeePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(hired_date) = patch.hired_date {
            self.hired_date = hired_date;
        }
    }
}

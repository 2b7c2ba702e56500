//! Task records and payloads

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::Resource;
use crate::core::schema::{EntitySchema, FieldKind, FieldSpec};

/// A single task inside a work order, assigned to an employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub task_id: i64,
    pub description: String,
    pub status: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub work_id: i64,
    pub employee_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /task/`
#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    pub description: String,
    #[serde(default)]
    pub status: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub work_id: i64,
    pub employee_id: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `PUT /task/{id}`; absent fields keep their value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    pub description: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub work_id: Option<i64>,
    pub employee_id: Option<i64>,
}

pub(crate) const SCHEMA: EntitySchema = EntitySchema {
    singular: "task",
    plural: "tasks",
    fields: &[
        FieldSpec::id("task_id"),
        FieldSpec::required("description", FieldKind::String),
        FieldSpec::optional("status", FieldKind::String),
        FieldSpec::required("start_date", FieldKind::Date),
        FieldSpec::optional("end_date", FieldKind::Date),
        FieldSpec::required("work_id", FieldKind::Integer),
        FieldSpec::required("employee_id", FieldKind::Integer),
        FieldSpec::timestamp("created_at"),
    ],
};

impl Resource for Task {
    type Create = NewTask;
    type Patch = TaskPatch;

    fn resource_name() -> &'static str {
        "task"
    }

    fn schema() -> &'static EntitySchema {
        &SCHEMA
    }

    fn id(&self) -> i64 {
        self.task_id
    }

    fn from_create(id: i64, input: NewTask) -> Self {
        Self {
            task_id: id,
            description: input.description,
            status: input.status,
            start_date: input.start_date,
            end_date: input.end_date,
            work_id: input.work_id,
            employee_id: input.employee_id,
            created_at: input.created_at.unwrap_or_else(Utc::now),
        }
    }

    fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = Some(status);
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = Some(end_date);
        }
        if let Some(work_id) = patch.work_id {
            self.work_id = work_id;
        }
        if let Some(employee_id) = patch.employee_id {
            self.employee_id = employee_id;
        }
    }
}

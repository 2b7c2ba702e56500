//! Invoice line items

use serde::{Deserialize, Serialize};

use crate::core::entity::Resource;
use crate::core::schema::{EntitySchema, FieldKind, FieldSpec};

/// One line of an invoice, tied to the task it bills
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub item_id: i64,
    pub cost: Option<f64>,
    pub description: String,
    pub invoice_id: i64,
    pub task_id: i64,
}

/// Payload for `POST /invoice_item/`
#[derive(Debug, Clone, Deserialize)]
pub struct NewInvoiceItem {
    #[serde(default)]
    pub cost: Option<f64>,
    pub description: String,
    pub invoice_id: i64,
    pub task_id: i64,
}

/// Payload for `PUT /invoice_item/{id}`; absent fields keep their value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceItemPatch {
    pub cost: Option<f64>,
    pub description: Option<String>,
    pub invoice_id: Option<i64>,
    pub task_id: Option<i64>,
}

pub(crate) const SCHEMA: EntitySchema = EntitySchema {
    singular: "invoice_item",
    plural: "invoice_items",
    fields: &[
        FieldSpec::id("item_id"),
        FieldSpec::optional("cost", FieldKind::Float),
        FieldSpec::required("description", FieldKind::String),
        FieldSpec::required("invoice_id", FieldKind::Integer),
        FieldSpec::required("task_id", FieldKind::Integer),
    ],
};

impl Resource for InvoiceItem {
    type Create = NewInvoiceItem;
    type Patch = InvoiceItemPatch;

    fn resource_name() -> &'static str {
        "invoice_item"
    }

    fn schema() -> &'static EntitySchema {
        &SCHEMA
    }

    fn id(&self) -> i64 {
        self.item_id
    }

    fn from_create(id: i64, input: NewInvoiceItem) -> Self {
        Self {
            item_id: id,
            cost: input.cost,
            description: input.description,
            invoice_id: input.invoice_id,
            task_id: input.task_id,
        }
    }

    fn apply_patch(&mut self, patch: InvoiceItemPatch) {
        if let Some(cost) = patch.cost {
            self.cost = Some(cost);
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(invoice_id) = patch.invoice_id {
            self.invoice_id = invoice_id;
        }
        if let Some(task_id) = patch.task_id {
            self.task_id = task_id;
        }
    }
}

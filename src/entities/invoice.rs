//! Invoice records and payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::Resource;
use crate::core::schema::{EntitySchema, FieldKind, FieldSpec};

/// An invoice issued to a client.
///
/// Totals are stored as supplied; the service does not recompute
/// `total_with_iva` from `total` and `iva`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: i64,
    pub issued_at: DateTime<Utc>,
    pub iva: f64,
    pub total: f64,
    pub total_with_iva: f64,
    pub client_id: i64,
}

/// Payload for `POST /invoice/`
#[derive(Debug, Clone, Deserialize)]
pub struct NewInvoice {
    #[serde(default)]
    pub issued_at: Option<DateTime<Utc>>,
    pub iva: f64,
    pub total: f64,
    pub total_with_iva: f64,
    pub client_id: i64,
}

/// Payload for `PUT /invoice/{id}`; absent fields keep their value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoicePatch {
    pub issued_at: Option<DateTime<Utc>>,
    pub iva: Option<f64>,
    pub total: Option<f64>,
    pub total_with_iva: Option<f64>,
    pub client_id: Option<i64>,
}

pub(crate) const SCHEMA: EntitySchema = EntitySchema {
    singular: "invoice",
    plural: "invoices",
    fields: &[
        FieldSpec::id("invoice_id"),
        FieldSpec::optional("issued_at", FieldKind::DateTime),
        FieldSpec::required("iva", FieldKind::Float),
        FieldSpec::required("total", FieldKind::Float),
        FieldSpec::required("total_with_iva", FieldKind::Float),
        FieldSpec::required("client_id", FieldKind::Integer),
    ],
};

impl Resource for Invoice {
    type Create = NewInvoice;
    type Patch = InvoicePatch;

    fn resource_name() -> &'static str {
        "invoice"
    }

    fn schema() -> &'static EntitySchema {
        &SCHEMA
    }

    fn id(&self) -> i64 {
        self.invoice_id
    }

    fn from_create(id: i64, input: NewInvoice) -> Self {
        Self {
            invoice_id: id,
            issued_at: input.issued_at.unwrap_or_else(Utc::now),
            iva: input.iva,
            total: input.total,
            total_with_iva: input.total_with_iva,
            client_id: input.client_id,
        }
    }

    fn apply_patch(&mut self, patch: InvoicePatch) {
        if let Some(issued_at) = patch.issued_at {
            self.issued_at = issued_at;
        }
        if let Some(iva) = patch.iva {
            self.iva = iva;
        }
        if let Some(total) = patch.total {
            self.total = total;
        }
        if let Some(total_with_iva) = patch.total_with_iva {
            self.total_with_iva = total_with_iva;
        }
        if let Some(client_id) = patch.client_id {
            self.client_id = client_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_at_defaults_to_now() {
        let invoice = Invoice::from_create(
            1,
            NewInvoice {
                issued_at: None,
                iva: 23.0,
                total: 100.0,
                total_with_iva: 123.0,
                client_id: 2,
            },
        );
        assert!(invoice.issued_at <= Utc::now());
    }

    #[test]
    fn test_patch_totals() {
        let mut invoice = Invoice::from_create(
            1,
            NewInvoice {
                issued_at: None,
                iva: 23.0,
                total: 100.0,
                total_with_iva: 123.0,
                client_id: 2,
            },
        );
        invoice.apply_patch(InvoicePatch {
            total: Some(200.0),
            total_with_iva: Some(246.0),
            ..Default::default()
        });
        assert_eq!(invoice.total, 200.0);
        assert_eq!(invoice.total_with_iva, 246.0);
        assert_eq!(invoice.iva, 23.0);
    }
}

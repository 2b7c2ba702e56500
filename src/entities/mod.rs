//! Domain record types
//!
//! One module per entity. Each defines the stored record, its create and
//! patch payloads, its field schema, and the [`Resource`](crate::core::Resource)
//! implementation tying them together. Foreign keys are stored as plain
//! identifiers; existence is never checked and deletes never cascade.

pub mod client;
pub mod employee;
pub mod invoice;
pub mod invoice_item;
pub mod setting;
pub mod task;
pub mod vehicle;
pub mod work;

pub use client::Client;
pub use employee::Employee;
pub use invoice::Invoice;
pub use invoice_item::InvoiceItem;
pub use setting::Setting;
pub use task::Task;
pub use vehicle::Vehicle;
pub use work::Work;

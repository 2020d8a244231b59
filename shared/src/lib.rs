//! Shared types for the Disk Mensagem service
//!
//! Domain models and small utilities used by the server and by
//! tooling/clients. Database derives are gated behind the `db` feature so
//! lightweight consumers do not pull in sqlx.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Order, OrderStatus, PaymentRecord, PaymentStatus};

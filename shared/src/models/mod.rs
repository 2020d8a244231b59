//! Domain Models
//!
//! Canonical schema for the ordering service. One English, snake_case shape
//! per entity; any historical field-name drift is mapped at the HTTP boundary,
//! not here.

pub mod admin_user;
pub mod category;
pub mod message;
pub mod order;
pub mod payment;
pub mod settings;

pub use admin_user::AdminUser;
pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use message::{Message, MessageCreate, MessageUpdate};
pub use order::{Order, OrderCreate, OrderStatus};
pub use payment::{PaymentRecord, PaymentStatus};
pub use settings::{Settings, SettingsUpdate};

//! Disk Mensagem Server — commissioned-message ordering service
//!
//! # Architecture
//!
//! The service is a single HTTP node with embedded storage:
//!
//! - **Order ledger** (`db::repository::order`): order creation, status
//!   transitions and filtered listings
//! - **Payment coordination** (`payments`): at-most-once PIX charge per
//!   order, static BR Code or Mercado Pago provider
//! - **Agenda** (`agenda`): day-scoped export for operational planning
//! - **Catalog** (`db::repository::{category, message}`): categories and
//!   message templates, bulk import included
//! - **Auth** (`auth`): JWT bearer gate + argon2 credentials
//!
//! # Module layout
//!
//! ```text
//! dm-server/src/
//! ├── core/      # configuration, state, server bootstrap
//! ├── auth/      # JWT, password hashing, middleware
//! ├── db/        # SQLite pool, migrations, seed, repositories
//! ├── payments/  # BR Code builder, providers, coordinator
//! ├── agenda/    # day-scoped aggregation + text rendering
//! ├── api/       # HTTP routes and handlers
//! └── utils/     # errors, validation, logging
//! ```

pub mod agenda;
pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod payments;
pub mod utils;

// Re-export common types
pub use auth::{CurrentAdmin, JwtService};
pub use core::{Config, Server, ServerState};
pub use payments::{PaymentCoordinator, PixProvider};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Set up process environment: dotenv + logging
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
    ____  _      __      __  ___
   / __ \(_)____/ /__   /  |/  /__  ____  _________ _____ ____  ____ ___
  / / / / / ___/ //_/  / /|_/ / _ \/ __ \/ ___/ __ `/ __ `/ _ \/ __ `__ \
 / /_/ / (__  ) ,<    / /  / /  __/ / / (__  ) /_/ / /_/ /  __/ / / / / /
/_____/_/____/_/|_|  /_/  /_/\___/_/ /_/____/\__,_/\__, /\___/_/ /_/ /_/
                                                  /____/
    "#
    );
}

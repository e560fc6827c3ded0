//! Server Module
//!
//! This module contains all server-side code for initializing and configuring
//! the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Environment configuration and database connection
//! - **`schema`** - Idempotent startup DDL
//! - **`init`** - State assembly, admin bootstrap and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - ServerConfig, ConfigError, connect_database
//! ├── schema.rs       - ensure_schema
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Database**: pool opened, schema ensured
//! 3. **State Creation**: session store, hasher, cookie settings
//! 4. **Admin Bootstrap**: optional, from `ADMIN_*` variables
//! 5. **Background Tasks**: expired-session purge
//! 6. **Router Creation**: routes, guards and middleware
//!
//! # Example
//!
//! ```rust,no_run
//! use userdesk::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Startup schema
pub mod schema;

/// Server initialization
pub mod init;


pub use config::{connect_database, AdminBootstrap, ConfigError, ServerConfig};
pub use init::{bootstrap_admin, build_state, create_app, StartupError};
pub use schema::ensure_schema;
pub use state::AppState;

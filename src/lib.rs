//! Permission gate - check whether a workflow actor holds a repository permission.
//!
//! The crate answers one question for an automation run: does the actor that
//! triggered it hold at least a required permission level on the repository?
//!
//! - **Permission**: the ordered level scale (`none < read < write < admin`)
//! - **Check**: validate, look up, compare ranks
//! - **Lookup**: the permission API capability, with a GitHub REST client
//! - **Config**: Layered configuration (file → env → CLI)
//! - **Output**: step output encoding and workflow commands
//!
//! # Example
//!
//! ```ignore
//! use permission_gate::{Loader, action, github, output::Sink};
//!
//! #[tokio::main]
//! async fn main() -> permission_gate::Result<()> {
//!     let loader = Loader::from_env();
//!     let config = loader.load(None, Some("write"), None, None, None, None)?;
//!     let context = loader.context()?;
//!     let client = github::Client::new(&config.github)?;
//!
//!     let mut sink = Sink::stdout(None);
//!     let outcome = action::run(&config, &context, &client, &mut sink).await?;
//!     println!("sufficient: {}", outcome.is_sufficient());
//!     Ok(())
//! }
//! ```

pub mod action;
pub mod check;
pub mod config;
pub mod context;
pub mod error;
pub mod github;
pub mod lookup;
pub mod output;
pub mod permission;

// Re-export main types at crate root
pub use check::{Cause, Checker, Options, Outcome, check};
pub use config::{Config, Loader};
pub use context::{Context, Repository};
pub use error::{Error, Result};
pub use lookup::{CollaboratorPermission, Lookup};
pub use permission::{Level, Scale};

//! sp_drive - A CLI client for inventorying SharePoint document libraries.
//!
//! This library provides functionality to:
//! - Authenticate as a service principal (OAuth2 client-credentials flow)
//! - Resolve a SharePoint site URL to its site, drive, and folder ids
//! - Flatten a drive's folder hierarchy into a depth-first inventory
//!
//! # Example
//!
//! ```no_run
//! use sp_drive::{site_path, SharePointClientBuilder};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SharePointClientBuilder::new()
//!         .with_tenant_id("tenant-id")
//!         .with_client_id("client-id")
//!         .with_client_secret("client-secret")
//!         .with_resource_url("https://graph.microsoft.com/")
//!         .build()
//!         .await?;
//!
//!     let site = site_path("https://contoso.sharepoint.com/sites/Marketing")?;
//!     let site_id = client.get_site_id(&site).await?;
//!     for drive in client.list_drives(&site_id).await? {
//!         println!("{}\t{}", drive.id, drive.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod builder;
pub mod client;
pub mod error;
pub mod models;
pub mod url_parser;

// Re-exports for convenience
pub use builder::SharePointClientBuilder;
pub use client::SharePointClient;
pub use error::{Result, SharePointError};
pub use models::{Drive, DriveItem, Entry, EntryKind};
pub use url_parser::site_path;

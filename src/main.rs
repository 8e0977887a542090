//! sp_drive CLI - Inventory SharePoint document libraries.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sp_drive::{site_path, Drive, SharePointClient, SharePointClientBuilder};

/// CLI tool for inventorying SharePoint document libraries.
#[derive(Parser)]
#[command(name = "sp_drive")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Azure AD tenant id.
    #[arg(long, env = "SP_TENANT_ID")]
    tenant_id: String,

    /// Application (client) id of the service principal.
    #[arg(long, env = "SP_CLIENT_ID")]
    client_id: String,

    /// Client secret of the service principal.
    #[arg(long, env = "SP_CLIENT_SECRET")]
    client_secret: String,

    /// Resource to request a token for.
    #[arg(long, env = "SP_RESOURCE_URL", default_value = "https://graph.microsoft.com/")]
    resource_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the drives of a site.
    Drives {
        /// Site URL (browser or host:/sites/Name form).
        site: String,
    },

    /// List the immediate children of a drive's root folder.
    List {
        /// Site URL (browser or host:/sites/Name form).
        site: String,

        /// Drive name to list (defaults to the site's first drive).
        #[arg(long)]
        drive_name: Option<String>,
    },

    /// Flatten a folder subtree into a depth-first inventory.
    Inventory {
        /// Site URL (browser or host:/sites/Name form).
        site: String,

        /// Drive-relative folder path, e.g. "Post/apply-now".
        folder: String,

        /// Drive name to inventory (defaults to the site's first drive).
        #[arg(long)]
        drive_name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let client = SharePointClientBuilder::new()
        .with_tenant_id(cli.tenant_id)
        .with_client_id(cli.client_id)
        .with_client_secret(cli.client_secret)
        .with_resource_url(cli.resource_url)
        .build()
        .await
        .context("Failed to authenticate against Azure AD")?;

    match cli.command {
        Commands::Drives { site } => {
            let path = site_path(&site)
                .with_context(|| format!("Invalid SharePoint site URL: {}", site))?;
            let site_id = client
                .get_site_id(&path)
                .await
                .with_context(|| format!("Failed to resolve site: {}", path))?;
            let drives = client
                .list_drives(&site_id)
                .await
                .context("Failed to list drives")?;

            if drives.is_empty() {
                println!("No drives found.");
            } else {
                println!("{:<70} {}", "ID", "NAME");
                println!("{}", "-".repeat(90));
                for drive in drives {
                    println!("{:<70} {}", drive.id, drive.name);
                }
            }
        }

        Commands::List { site, drive_name } => {
            let (site_id, drive) = resolve_drive(&client, &site, drive_name.as_deref()).await?;

            let items = client
                .get_folder_content(&site_id, &drive.id)
                .await
                .with_context(|| format!("Failed to list root of drive: {}", drive.name))?;

            if items.is_empty() {
                println!("Drive root is empty.");
            } else {
                println!("{:<44} {}", "ID", "NAME");
                println!("{}", "-".repeat(70));
                for item in items {
                    println!("{}\t{}", item.id, item.name);
                }
            }
        }

        Commands::Inventory {
            site,
            folder,
            drive_name,
        } => {
            let (site_id, drive) = resolve_drive(&client, &site, drive_name.as_deref()).await?;

            let folder_id = client
                .get_folder_id(&drive.id, &folder)
                .await
                .with_context(|| format!("Failed to resolve folder: {}", folder))?;

            let entries = client
                .list_folder_contents(&site_id, &drive.id, &folder_id)
                .await
                .with_context(|| format!("Failed to enumerate folder: {}", folder))?;

            if entries.is_empty() {
                println!("Folder is empty.");
            } else {
                println!("{:<8} {:<30} {}", "KIND", "TYPE", "NAME");
                println!("{}", "-".repeat(70));
                for entry in entries {
                    println!("{}", entry);
                }
            }
        }
    }

    Ok(())
}

/// Resolve a site URL to its site id and a target drive.
async fn resolve_drive(
    client: &SharePointClient,
    site: &str,
    drive_name: Option<&str>,
) -> Result<(String, Drive)> {
    let path =
        site_path(site).with_context(|| format!("Invalid SharePoint site URL: {}", site))?;
    let site_id = client
        .get_site_id(&path)
        .await
        .with_context(|| format!("Failed to resolve site: {}", path))?;
    let drives = client
        .list_drives(&site_id)
        .await
        .context("Failed to list drives")?;

    let drive = match drive_name {
        Some(name) => drives
            .into_iter()
            .find(|d| d.name == name)
            .with_context(|| format!("No drive named '{}' on this site", name))?,
        None => drives.into_iter().next().context("Site has no drives")?,
    };

    Ok((site_id, drive))
}

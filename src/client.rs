//! Microsoft Graph client for SharePoint drive operations.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{Result, SharePointError};
use crate::models::{
    ApiErrorResponse, ChildrenResponse, Drive, DriveItem, DriveListResponse, Entry, EntryKind,
    Site,
};

/// Base URL for Microsoft Graph v1.0.
pub const DEFAULT_GRAPH_BASE: &str = "https://graph.microsoft.com/v1.0";

/// Client for reading a SharePoint site's drives through Microsoft Graph.
///
/// Constructed exclusively by
/// [`SharePointClientBuilder`](crate::SharePointClientBuilder), so a client
/// in hand always holds a bearer token. Requests are issued one at a time;
/// the token is written once at construction and only read afterwards.
pub struct SharePointClient {
    graph_base: String,
    token: String,
    http: Client,
}

impl SharePointClient {
    pub(crate) fn new(graph_base: String, token: String) -> Self {
        Self {
            graph_base,
            token,
            http: Client::new(),
        }
    }

    /// Issue an authenticated GET and decode the JSON body.
    ///
    /// Every non-success response maps to `ApiError`, using Graph's error
    /// envelope when the body carries one. The same policy applies to every
    /// operation on this client.
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&error_body) {
                return Err(SharePointError::ApiError {
                    status: status.as_u16(),
                    code: api_error.error.code,
                    message: api_error.error.message,
                });
            }
            return Err(SharePointError::ApiError {
                status: status.as_u16(),
                code: "unknown".to_string(),
                message: error_body,
            });
        }

        Ok(response.json().await?)
    }

    /// Resolve a Graph site path (`host.sharepoint.com:/sites/Name`) to the
    /// site's id.
    pub async fn get_site_id(&self, site_path: &str) -> Result<String> {
        let site: Site = self
            .get_json(format!("{}/sites/{}", self.graph_base, site_path))
            .await?;
        Ok(site.id)
    }

    /// List the drives attached to a site, in the service's order.
    pub async fn list_drives(&self, site_id: &str) -> Result<Vec<Drive>> {
        let drives: DriveListResponse = self
            .get_json(format!("{}/sites/{}/drives", self.graph_base, site_id))
            .await?;
        Ok(drives.value)
    }

    /// Resolve a drive-relative folder path (e.g. `Post/apply-now`) to the
    /// folder's item id.
    pub async fn get_folder_id(&self, drive_id: &str, folder_path: &str) -> Result<String> {
        let item: DriveItem = self
            .get_json(format!(
                "{}/drives/{}/root:/{}",
                self.graph_base, drive_id, folder_path
            ))
            .await?;
        Ok(item.id)
    }

    /// List the immediate children of a drive's root folder.
    pub async fn get_folder_content(
        &self,
        site_id: &str,
        drive_id: &str,
    ) -> Result<Vec<DriveItem>> {
        self.fetch_children(format!(
            "{}/sites/{}/drives/{}/root/children",
            self.graph_base, site_id, drive_id
        ))
        .await
    }

    /// Flatten the subtree rooted at `folder_id` into a depth-first,
    /// pre-order list of entries: a folder's entry is emitted before its
    /// contents, and each subtree completes before the next sibling begins.
    ///
    /// An explicit worklist replaces recursion, so hierarchy depth never
    /// grows the call stack. Children go onto the worklist in reverse
    /// listing order, which makes pop order match listing order. One request
    /// is in flight at a time.
    pub async fn list_folder_contents(
        &self,
        site_id: &str,
        drive_id: &str,
        folder_id: &str,
    ) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();
        let mut worklist = self
            .fetch_children(self.children_url(site_id, drive_id, folder_id))
            .await?;
        worklist.reverse();

        while let Some(item) = worklist.pop() {
            if item.folder.is_some() {
                let mut children = self
                    .fetch_children(self.children_url(site_id, drive_id, &item.id))
                    .await?;
                children.reverse();
                entries.push(Entry {
                    name: item.name,
                    kind: EntryKind::Folder,
                    content_type: None,
                });
                worklist.append(&mut children);
            } else if let Some(file) = item.file {
                entries.push(Entry {
                    name: item.name,
                    kind: EntryKind::File,
                    content_type: file.mime_type,
                });
            }
            // Items with neither facet (packages, notebooks) are skipped.
        }

        Ok(entries)
    }

    fn children_url(&self, site_id: &str, drive_id: &str, folder_id: &str) -> String {
        format!(
            "{}/sites/{}/drives/{}/items/{}/children",
            self.graph_base, site_id, drive_id, folder_id
        )
    }

    /// Fetch every child of a folder, following `@odata.nextLink` until the
    /// listing is exhausted.
    async fn fetch_children(&self, first_page_url: String) -> Result<Vec<DriveItem>> {
        let mut all_items = Vec::new();
        let mut next_url = Some(first_page_url);

        while let Some(url) = next_url {
            let page: ChildrenResponse = self.get_json(url).await?;
            all_items.extend(page.value);
            next_url = page.next_link;
        }

        Ok(all_items)
    }
}

use crate::client::ComicvineClient;
use crate::models::{Image, Issue, IssueImage};

impl ComicvineClient {
    /// Get a full issue record by ID.
    /// GET /issue/{issue_id}/
    pub async fn get_issue(&self, issue_id: i64) -> crate::Result<Issue> {
        self.fetch(&format!("/issue/{}/", issue_id), &[]).await
    }

    /// Get only the cover image URLs for an issue.
    /// GET /issue/{issue_id}/?field_list=image
    pub async fn get_issue_image(&self, issue_id: i64) -> crate::Result<Image> {
        let restricted: IssueImage = self
            .fetch(&format!("/issue/{}/", issue_id), &[("field_list", "image")])
            .await?;
        Ok(restricted.image.unwrap_or_default())
    }
}

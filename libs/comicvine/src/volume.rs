use crate::client::ComicvineClient;
use crate::models::Volume;

impl ComicvineClient {
    /// Get a volume (series) record by ID, including its issue stubs.
    /// GET /volume/{volume_id}/
    pub async fn get_volume(&self, volume_id: i64) -> crate::Result<Volume> {
        self.fetch(&format!("/volume/{}/", volume_id), &[]).await
    }
}

use crate::client::{ComicvineClient, json_error};
use crate::models::{Page, VolumeSummary};

/// Fields requested from the search endpoint; everything else is ignored by
/// the metadata mapping and left out of the response.
const SEARCH_FIELD_LIST: &str = "name,id,start_year,publisher,image,description,count_of_issues";

impl ComicvineClient {
    /// Fetch one page of volume search results, sorted by start year.
    /// GET /search/?resources=volume&query={query}[&offset={offset}]
    pub async fn search_volumes(
        &self,
        query: &str,
        offset: i64,
    ) -> crate::Result<Page<VolumeSummary>> {
        let offset_value = offset.to_string();
        let mut params = vec![
            ("resources", "volume"),
            ("query", query),
            ("field_list", SEARCH_FIELD_LIST),
            ("sort", "start_year"),
        ];
        if offset > 0 {
            params.push(("offset", offset_value.as_str()));
        }
        let envelope = self.get_raw("/search/", &params).await?.into_checked()?;
        let results: Vec<VolumeSummary> =
            serde_path_to_error::deserialize(envelope.results).map_err(json_error)?;
        Ok(Page {
            limit: envelope.limit,
            page_results: envelope.number_of_page_results,
            total_results: envelope.number_of_total_results,
            results,
        })
    }
}

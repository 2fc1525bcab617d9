use async_trait::async_trait;
use tracing::info;

use crate::{
    config::SheetConfig,
    http::{ApiError, SongSource},
};

const SHEETS_BASE: &str = "https://docs.google.com/spreadsheets/d";

/// Reads the song table through the spreadsheet's CSV export endpoint.
pub struct SheetSource {
    client: reqwest::Client,
    config: SheetConfig,
}

impl SheetSource {
    pub fn new(client: reqwest::Client, config: SheetConfig) -> Self {
        Self { client, config }
    }

    fn export_url(&self) -> String {
        format!("{SHEETS_BASE}/{}/gviz/tq", self.config.sheet_id)
    }
}

#[async_trait]
impl SongSource for SheetSource {
    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, ApiError> {
        let body = self
            .client
            .get(self.export_url())
            .query(&[
                ("tqx", "out:csv"),
                ("sheet", self.config.sheet_name.as_str()),
                ("range", self.config.range.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let rows = parse_rows(&body)?;
        info!(rows = rows.len(), sheet = self.config.sheet_name.as_str(), "sheet_fetched");
        Ok(rows)
    }
}

/// Parses headerless CSV text. Rows may have any number of fields.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<String>>, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    reader
        .records()
        .map(|record| -> Result<Vec<String>, ApiError> {
            Ok(record?.iter().map(str::to_string).collect())
        })
        .collect()
}

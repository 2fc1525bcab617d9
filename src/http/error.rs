use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Malformed sheet data: {0}")]
    Sheet(#[from] csv::Error),

    #[error("Token exchange rejected: {0}")]
    Token(String),

    #[error("Image decoding failed: {0}")]
    Image(#[from] image::ImageError),
}

#[cfg(test)]
impl ApiError {
    /// A genuine csv error: the second record is shorter than the first.
    pub(crate) fn ragged_sheet() -> Self {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader("a,b\nc".as_bytes());
        let err = reader
            .records()
            .find_map(Result::err)
            .expect("ragged rows are rejected by a strict reader");
        Self::Sheet(err)
    }
}

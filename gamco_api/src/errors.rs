//! Error types for the API client and decoder.

/// Errors that can occur when fetching or decoding fund data.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configured base URL could not be turned into a request URL.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The request could not be sent or no response was received.
    #[error("HTTP GET failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The API answered with something other than `200 OK`.
    #[error("API call failed, response status {status}")]
    HttpStatus { status: u16, body: String },
    /// Headers arrived but the body could not be read.
    #[error("Failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),
    /// The body was not a JSON array of fund objects.
    #[error("Failed to decode fund data: {0}")]
    Parse(#[from] serde_json::Error),
    /// A date field did not match its wire format. `source` is `None` when
    /// the value was rejected on shape alone.
    #[error("Invalid date in field `{field}`: {value:?}")]
    DateFormat {
        field: &'static str,
        value: String,
        source: Option<chrono::ParseError>,
    },
    /// No fund with the requested ticker symbol was published.
    #[error("No fund found with symbol {symbol}")]
    NotFound { symbol: String },
}

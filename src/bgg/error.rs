/// Errors that can occur while fetching a record from BoardGameGeek.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("BoardGameGeek API token is not configured")]
    MissingToken,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("BoardGameGeek responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    #[error("Game {0} not found in BoardGameGeek response")]
    ItemNotFound(u64),
}

impl FetchError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedXml(msg.into())
    }

    /// Upstream HTTP status, when the failure carries one
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status(status) => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

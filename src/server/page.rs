//! The home page template.

use std::borrow::Cow;
use std::path::PathBuf;

/// Page compiled into the binary.
const EMBEDDED_PAGE: &str = include_str!("../../assets/index.html");

/// Failure to produce the page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("failed to read page template {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the page markup comes from.
///
/// The page carries no request-derived data; rendering is just producing
/// the markup.
#[derive(Debug, Clone)]
pub enum Page {
    Embedded(&'static str),
    /// Re-read on every request so the markup can be edited without a rebuild.
    File(PathBuf),
}

impl Page {
    pub fn embedded() -> Self {
        Self::Embedded(EMBEDDED_PAGE)
    }

    pub async fn render(&self) -> Result<Cow<'static, str>, PageError> {
        match self {
            Self::Embedded(markup) => Ok(Cow::Borrowed(markup)),
            Self::File(path) => tokio::fs::read_to_string(path)
                .await
                .map(Cow::Owned)
                .map_err(|source| PageError::Read {
                    path: path.clone(),
                    source,
                }),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::embedded()
    }
}

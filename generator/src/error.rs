use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to parse the schema document: {0}")]
    Parse(#[from] roxmltree::Error),
    #[error("the document root is not an <xs:schema> element")]
    NotASchema,
    #[error("the schema has no global element named {0:?}")]
    UnknownElement(String),
    #[error("failed to write the diagram: {0}")]
    Output(#[from] io::Error),
}

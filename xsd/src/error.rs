use thiserror::Error;

#[derive(Debug, Error)]
pub enum XsdError {
    #[error("failed to resolve prefix {0:?} to a namespace URI")]
    NamePrefixNotResolved(String),
}

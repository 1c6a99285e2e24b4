use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("not a valid language '{0}' (supported: {supported})", supported = crate::Language::supported_codes())]
    UnsupportedLanguage(String),

    #[error("cannot enable --strip-prefix and --strip-suffix at the same time: the page name would be empty")]
    ConflictingStripFlags,

    #[error("line {line} is not a page URL of the form https://<lang>.wikipedia.org/wiki/<Page>: '{content}'")]
    MalformedLine { line: usize, content: String },
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrmeError {
    #[error("Template catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Language '{0}' not found in catalog")]
    LanguageNotFound(String),

    #[error("App type '{0}' not found")]
    AppTypeNotFound(String),

    #[error("No templates available for {language} / {app_type}")]
    EmptyTemplateSet { language: String, app_type: String },

    #[error("Failed to create project: {0}")]
    Materialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PrmeError>;

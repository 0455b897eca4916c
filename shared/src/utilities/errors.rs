#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{resource} with ID {id} not found")]
    NotFoundError { resource: String, id: String },
    #[error("Referential integrity error, {0}")]
    ReferentialIntegrityError(String),
    #[error("Validation error, {0}")]
    ValidationError(String),
    #[error("Validation errors, {0}")]
    ValidatorValidationErrors(#[from] validator::ValidationErrors),
    #[error("Storage error, {0}")]
    StorageError(String),
    #[error("Serde json error, {0}")]
    SerdejsonError(#[from] serde_json::Error),
    #[error("IO error, {0}")]
    IoError(#[from] std::io::Error),
    #[error("Environment variable {0} not set")]
    EnvironmentVariableNotSetError(String),
    #[error("{0}")]
    FileReadError(String),
}

/// Coarse classification the form layer uses to pick a message style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    ReferentialIntegrity,
    Validation,
    Storage,
    Configuration,
}

impl AppError {
    pub fn not_found(resource: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFoundError {
            resource: resource.into(),
            id: id.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFoundError { .. } => ErrorKind::NotFound,
            Self::ReferentialIntegrityError(_) => ErrorKind::ReferentialIntegrity,
            Self::ValidationError(_) | Self::ValidatorValidationErrors(_) => ErrorKind::Validation,
            Self::StorageError(_) | Self::SerdejsonError(_) | Self::IoError(_) => {
                ErrorKind::Storage
            }
            Self::EnvironmentVariableNotSetError(_) | Self::FileReadError(_) => {
                ErrorKind::Configuration
            }
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_referential_integrity(&self) -> bool {
        self.kind() == ErrorKind::ReferentialIntegrity
    }
}

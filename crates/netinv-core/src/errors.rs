use netinv_core_types::RequestId;
use thiserror::Error;

/// Result type alias using InventoryError
pub type Result<T> = std::result::Result<T, InventoryError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure the service can report falls into one of these kinds. Each
/// kind maps to a stable code used in REST error bodies, GraphQL error
/// extensions and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Domain
    NotFound,
    Conflict,
    NoOp,
    Validation,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Conflict => "ERR_CONFLICT",
            ExErrorKind::NoOp => "ERR_NO_OP",
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether the caller caused this error (as opposed to the service)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExErrorKind::NotFound
                | ExErrorKind::Conflict
                | ExErrorKind::NoOp
                | ExErrorKind::Validation
        )
    }
}

/// Canonical structured error type
///
/// Structured view of an `InventoryError` with classification fields for
/// programmatic handling at the transport boundary.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    field: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            field: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add offending input field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for inventory operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InventoryError {
    /// No record matches the identifier
    #[error("Inventory item with id {id} not found")]
    NotFound { id: String },

    /// Another record already holds this name
    #[error("Name '{name}' already exists")]
    NameConflict { name: String },

    /// Partial update supplied no fields
    #[error("No fields provided for update")]
    NoFieldsToUpdate { id: String },

    /// A required input field was not supplied
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// An input field could not be parsed or is not allowed
    #[error("Invalid value for field {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Persistence error: {message}")]
    Persistence { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl InventoryError {
    /// Classify this error into the canonical taxonomy
    pub fn kind(&self) -> ExErrorKind {
        match self {
            InventoryError::NotFound { .. } => ExErrorKind::NotFound,
            InventoryError::NameConflict { .. } => ExErrorKind::Conflict,
            InventoryError::NoFieldsToUpdate { .. } => ExErrorKind::NoOp,
            InventoryError::MissingField { .. } | InventoryError::InvalidField { .. } => {
                ExErrorKind::Validation
            }
            InventoryError::Persistence { .. } => ExErrorKind::Persistence,
            InventoryError::Serialization { .. } => ExErrorKind::Serialization,
            InventoryError::Io { .. } => ExErrorKind::Io,
            InventoryError::Internal { .. } => ExErrorKind::Internal,
        }
    }
}

/// Conversion from InventoryError to ExError
impl From<InventoryError> for ExError {
    fn from(err: InventoryError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        let ex = ExError::new(kind).with_message(message);
        match err {
            InventoryError::NotFound { id } => ex.with_entity_id(id),
            InventoryError::NameConflict { name } => ex.with_field("name").with_entity_id(name),
            InventoryError::NoFieldsToUpdate { id } => ex.with_entity_id(id).with_op("update"),
            InventoryError::MissingField { field } => ex.with_field(field),
            InventoryError::InvalidField { field, .. } => ex.with_field(field),
            InventoryError::Persistence { .. }
            | InventoryError::Serialization { .. }
            | InventoryError::Io { .. }
            | InventoryError::Internal { .. } => ex,
        }
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        InventoryError::Io {
            message: err.to_string(),
        }
    }
}

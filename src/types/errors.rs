use std::fmt;

// === StorageError ===

/// Errors from the blob persistence layer.
#[derive(Debug)]
pub enum StorageError {
    /// Underlying SQLite operation failed.
    Database(String),
    /// Failed to serialize a blob for writing.
    Serialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Database(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::Serialization(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

// === LinkError ===

/// Errors related to link collection operations.
#[derive(Debug)]
pub enum LinkError {
    /// Link with the given ID was not found.
    NotFound(String),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::NotFound(id) => write!(f, "Link not found: {}", id),
        }
    }
}

impl std::error::Error for LinkError {}

// === CategoryError ===

/// Errors related to category lifecycle operations.
#[derive(Debug)]
pub enum CategoryError {
    /// Category with the given ID was not found.
    NotFound(String),
    /// The reserved default category cannot be deleted.
    ReservedCategory,
}

impl fmt::Display for CategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryError::NotFound(id) => write!(f, "Category not found: {}", id),
            CategoryError::ReservedCategory => {
                write!(f, "The default category cannot be deleted")
            }
        }
    }
}

impl std::error::Error for CategoryError {}

// === BatchError ===

/// Errors related to batch-edit operations.
#[derive(Debug)]
pub enum BatchError {
    /// A batch operation was requested with nothing selected.
    EmptySelection,
    /// The batch-move target category was not found.
    CategoryNotFound(String),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::EmptySelection => write!(f, "No links selected"),
            BatchError::CategoryNotFound(id) => {
                write!(f, "Batch-move target category not found: {}", id)
            }
        }
    }
}

impl std::error::Error for BatchError {}

// === ImportError ===

/// Errors from bookmark import collaborators.
#[derive(Debug)]
pub enum ImportError {
    /// The raw import data could not be parsed.
    Parse(String),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Parse(msg) => write!(f, "Import parse error: {}", msg),
        }
    }
}

impl std::error::Error for ImportError {}

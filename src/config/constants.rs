//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3333;

// =============================================================================
// Routes
// =============================================================================

/// Base path of the repository collection
pub const REPOSITORIES_PATH: &str = "/repositories";

/// Health check path
pub const HEALTH_PATH: &str = "/health";

// =============================================================================
// Error Messages
// =============================================================================

/// Returned when an id path segment is not a well-formed UUID
pub const MSG_INVALID_REPOSITORY_ID: &str = "Invalid Repository ID";

/// Returned when a well-formed id matches no live repository
pub const MSG_REPOSITORY_NOT_FOUND: &str = "Repository not found!";

/// Returned in place of internal error details
pub const MSG_INTERNAL_ERROR: &str = "An internal error occurred";

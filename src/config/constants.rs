//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL: an on-disk SQLite file in the working
/// directory, created on first open.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://roomshare.db?mode=rwc";

/// Connection pool upper bound. The store serves a single logical actor,
/// so the pool stays small.
pub const MAX_DB_CONNECTIONS: u32 = 5;

// =============================================================================
// Request states
// =============================================================================

/// Request state stored for a freshly created request
pub const STATE_PENDING: &str = "pending";

/// Request state after the owner accepts it
pub const STATE_ACCEPTED: &str = "accepted";

/// Request state after the owner declines it
pub const STATE_REJECTED: &str = "rejected";

/// Request state after withdrawal or a room soft-delete cascade
pub const STATE_CANCELLED: &str = "cancelled";

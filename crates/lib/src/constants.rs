//! Constants used throughout the apidraft library.

/// Default bound on the undo stack; the oldest entries are evicted first
/// once the bound is exceeded.
pub const DEFAULT_UNDO_CAPACITY: usize = 50;

/// Reserved segment name for the top-level metadata node.
pub const INFO: &str = "info";

/// Reserved segment name for the path-items container.
pub const PATHS: &str = "paths";

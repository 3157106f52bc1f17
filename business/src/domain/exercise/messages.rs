//! User-facing toast texts for exercise operations.

pub const REMOVING: &str = "Removing resource...";
pub const REMOVED: &str = "Resource removed successfully, refresh the table!";
pub const NOT_FOUND: &str = "No resource exists with this id!";

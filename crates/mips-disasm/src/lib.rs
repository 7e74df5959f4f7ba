pub mod analyze;
pub mod listing;
pub mod model;

// Re-export commonly used types/functions for consumers
pub use analyze::{scan_branches, BranchTargets};
pub use listing::{build_listing, disassemble, Line, Listing};
pub use model::{load_words, output_path, parse_words, InputPathError, MalformedLine};

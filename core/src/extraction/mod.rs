pub mod category;
pub mod reason;

pub use category::{classify, Domain};
pub use reason::{clean_reason, BOILERPLATE_PATTERNS};

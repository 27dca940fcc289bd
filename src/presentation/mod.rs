/// Connected host models
pub mod host;
/// Router device models
pub mod router;
/// Serialization utilities for router payloads
pub mod serialization;
/// WAN statistics models
pub mod wan;

pub use host::*;
pub use router::*;
pub use wan::*;

/// Router service interface
pub mod router;

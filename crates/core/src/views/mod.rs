pub mod snapshot;
pub mod traits;

pub mod sources;
pub mod traits;

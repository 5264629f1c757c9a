pub mod fixture;
pub mod record;

pub use fixture::*;
pub use record::*;

pub mod model;
pub mod payload;

pub use model::*;
pub use payload::canonicalize;

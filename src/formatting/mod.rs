pub mod issues;
pub mod summary;
pub mod utils;

pub use issues::*;
pub use summary::*;
pub use utils::*;

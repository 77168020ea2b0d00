pub mod showing;
pub mod traits;

pub use showing::*;
pub use traits::*;

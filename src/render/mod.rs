pub mod renders;
pub mod shape;

pub use renders::*;
pub use shape::*;

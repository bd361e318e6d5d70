pub mod account;
pub mod catalog;
pub mod export;
pub mod model;
pub mod statistics;

pub use account::*;
pub use catalog::*;
pub use export::*;
pub use model::*;
pub use statistics::*;

pub mod assembler;
pub mod base;
pub mod catalog;
pub mod decorators;
pub mod presenter;

pub use crate::domain::model::{BaseKind, DecoratorKind, Rendering, Step};
pub use crate::domain::ports::Component;
pub use crate::utils::error::Result;

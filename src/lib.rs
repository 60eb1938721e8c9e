pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{OutputFormat, Session};
pub use config::MenuConfig;
pub use core::{assembler::Assembler, catalog::Catalog, presenter::Presenter};
pub use domain::model::{BaseKind, DecoratorKind, Rendering, Step};
pub use domain::ports::Component;
pub use utils::error::{DemoError, Result};

pub mod config;
pub mod error;
pub mod language;
pub mod naming;
pub mod page;

pub use config::*;
pub use error::ModelError;
pub use language::Language;
pub use naming::NamingScheme;
pub use page::*;

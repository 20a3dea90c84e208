pub mod add;
pub mod config;
pub mod remove;
pub mod sort;
pub mod suggest;

pub use add::*;
pub use config::*;
pub use remove::*;
pub use sort::*;
pub use suggest::*;

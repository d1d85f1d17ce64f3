pub mod anchor;
pub mod config;
pub mod datasheet;
pub mod design;
pub mod error;
pub mod format;
pub mod io;
pub mod modules;
pub mod predicates;
pub mod program;
pub mod tags;
pub mod types;

pub use error::{ErrorKind, PullingError, Result};
pub use program::{active_modules, generate_program};

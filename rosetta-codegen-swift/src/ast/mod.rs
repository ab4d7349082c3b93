//! Swift AST builders for generating files, enums, classes and functions.
//!
//! These provide a high-level API for constructing Swift syntax, which is
//! then rendered via CodeBuilder.

mod class;
mod enums;
mod fns;
mod header;
mod imports;

pub use class::{Class, Property};
pub use enums::{Case, Enum};
pub use fns::{Func, Param};
pub use header::FileHeader;
pub use imports::Import;

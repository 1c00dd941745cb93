#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod avl_tree;
pub mod bst;
pub mod entry;
mod error;

pub use self::error::{Error, Result};

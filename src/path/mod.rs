mod generic_path;
pub use generic_path::*;

mod reconstruction;
pub(crate) use reconstruction::{reconstruct, ParentLinks};

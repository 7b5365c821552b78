mod arena;
mod handle;
mod iter;
mod node;
mod raw_bimap;
mod tree;

pub(crate) use handle::Handle;
pub(crate) use iter::RawIter;
pub(crate) use node::{LEFT, RIGHT};
pub(crate) use raw_bimap::RawBiMap;

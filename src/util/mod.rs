pub mod format;
pub mod pagination;
pub mod parse;

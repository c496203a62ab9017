//! Items miscellaneous to the library.

pub mod log;

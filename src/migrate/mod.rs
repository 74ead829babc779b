pub mod convert;
pub mod master;
pub mod parse;
pub mod paths;

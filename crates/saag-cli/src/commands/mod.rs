pub mod interpret;
pub mod parse;
pub mod reference;

pub mod fields;
pub mod parser;
pub mod rules;

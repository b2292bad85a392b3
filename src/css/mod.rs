//! Style rule compiler: value tokenizer, property and shorthand tables,
//! description model, content hashing, compilation.

pub mod scalar;
pub mod tokenizer;
pub mod value;
pub mod properties;
pub mod shorthands;
pub mod model;
pub mod hash;
pub mod compiler;

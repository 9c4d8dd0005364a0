//! Column type inference and the value predicates behind it.

mod classifier;
mod values;

pub use classifier::TypeInferencer;
pub use values::{
    BOOLEAN_TOKENS, is_boolean, is_date, is_numeric, is_whole, parse_boolean, parse_date,
    parse_number,
};

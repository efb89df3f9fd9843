pub mod emit;
pub mod value;

pub use emit::{create_table_statement, insert_statements, surrogate_id_collides};
pub use value::{escape_string, format_value};

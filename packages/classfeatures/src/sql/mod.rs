//! SQL output generation for class feature records.

mod writer;

pub use writer::{insert_statement, print_sql, render_sql, use_statement, write_sql};

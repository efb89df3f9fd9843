pub mod charset;
pub mod datatype;
pub mod delimiter;
pub mod header;

pub use charset::{decode_input, detect_charset, Charset};
pub use datatype::{detect_column_type, detect_column_types};
pub use delimiter::detect_separator;
pub use header::{duplicate_names, normalize_header, normalize_headers};

use crate::config::{Config, ConversionOptions};
use crate::detection::{
    charset::decode_input, detect_column_types, detect_separator, duplicate_names,
    normalize_headers,
};
use crate::error::{Csv2SqlError, Result};
use crate::scanner::scan;
use crate::sql::{create_table_statement, insert_statements, surrogate_id_collides};
use crate::table::RawTable;
use crate::types::constants::GENERATED_BANNER;
use crate::types::{Column, Schema};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Outcome of converting one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub table_name: String,
    pub separator: char,
    pub schema: Schema,
    pub row_count: usize,
    /// CREATE TABLE first, then INSERTs in row order
    pub statements: Vec<String>,
}

impl Conversion {
    pub fn header_names(&self) -> Vec<String> {
        self.schema.iter().map(|c| c.name.clone()).collect()
    }

    /// Full text of the `.sql` file
    pub fn to_sql(&self) -> String {
        let mut sql = format!("{}\n", GENERATED_BANNER);
        let mut statements = self.statements.iter();
        if let Some(create) = statements.next() {
            sql.push_str(create);
            sql.push_str("\n\n");
        }
        for statement in statements {
            sql.push_str(statement);
            sql.push('\n');
        }
        sql
    }
}

/// Convert raw delimited text into a schema and SQL statements
pub fn convert(text: &str, options: &ConversionOptions) -> Result<Conversion> {
    let separator = detect_separator(text);

    let scanned = scan(text, separator);
    if scanned.unterminated_quote {
        debug!("input ends inside a quoted field");
    }

    let table = RawTable::from_rows(scanned.rows)?;
    info!(
        separator = %separator.escape_default(),
        columns = table.column_count(),
        rows = table.row_count(),
        "parsed table"
    );

    let names = normalize_headers(&table.headers);
    let duplicates = duplicate_names(&names);
    if !duplicates.is_empty() {
        warn!("duplicate column names: {}", duplicates.join(", "));
    }

    let types = detect_column_types(&table.rows, table.column_count());
    let schema: Schema = names
        .into_iter()
        .zip(types)
        .map(|(name, column_type)| {
            debug!(column = %name, column_type = %column_type, "inferred column type");
            Column { name, column_type }
        })
        .collect();

    if options.with_id && surrogate_id_collides(&schema) {
        warn!("--with-id adds an `id` column but the input already has one");
    }

    let mut statements = vec![create_table_statement(
        &options.table_name,
        &schema,
        options.with_id,
    )];
    statements.extend(insert_statements(
        &options.table_name,
        &schema,
        &table.rows,
        options.batch_size,
    ));

    Ok(Conversion {
        table_name: options.table_name.clone(),
        separator,
        schema,
        row_count: table.row_count(),
        statements,
    })
}

/// Summary of a completed file conversion
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub output_path: PathBuf,
    pub charset: String,
    pub batch_size: usize,
    pub with_id: bool,
    pub conversion: Conversion,
}

impl ConversionReport {
    pub fn summary(&self) -> String {
        let batch = if self.batch_size > 0 {
            self.batch_size.to_string()
        } else {
            "none".to_string()
        };
        format!(
            "Generated: {} (table: {}, sep: '{}', batch: {}, withId: {})",
            self.output_path.display(),
            self.conversion.table_name,
            self.conversion.separator.escape_default(),
            batch,
            self.with_id
        )
    }
}

/// Reads an input file, converts it and writes the SQL file
pub struct Converter {
    config: Config,
}

impl Converter {
    pub fn new(config: Config) -> Self {
        Converter { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the whole pipeline. Nothing is written unless conversion succeeds.
    pub fn run(&self) -> Result<ConversionReport> {
        let input_path = &self.config.input_path;
        let data = fs::read(input_path).map_err(|source| Csv2SqlError::ReadInput {
            path: input_path.clone(),
            source,
        })?;

        let (text, charset) = decode_input(&data);
        info!(path = %input_path.display(), charset = %charset.name(), "read input");

        let conversion = convert(&text, &self.config.options)?;
        self.write_output(&conversion.to_sql())?;

        Ok(ConversionReport {
            output_path: self.config.output_path.clone(),
            charset: charset.name(),
            batch_size: self.config.options.batch_size,
            with_id: self.config.options.with_id,
            conversion,
        })
    }

    fn write_output(&self, sql: &str) -> Result<()> {
        let output_path = &self.config.output_path;
        let write_error = |source| Csv2SqlError::WriteOutput {
            path: output_path.clone(),
            source,
        };

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(output_path, sql).map_err(write_error)?;

        info!(path = %output_path.display(), bytes = sql.len(), "wrote output");
        Ok(())
    }
}

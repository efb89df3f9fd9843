use crate::scanner::Row;
use crate::sql::value::format_row;
use crate::types::constants::{SURROGATE_ID_COLUMN, SURROGATE_ID_NAME};
use crate::types::{ColumnType, Schema};

/// CREATE TABLE statement, one column per line
pub fn create_table_statement(table_name: &str, schema: &Schema, with_id: bool) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(schema.len() + 1);
    if with_id {
        lines.push(format!("  {}", SURROGATE_ID_COLUMN));
    }
    lines.extend(
        schema
            .iter()
            .map(|column| format!("  {} {}", column.name, column.column_type)),
    );

    format!("CREATE TABLE {} (\n{}\n);", table_name, lines.join(",\n"))
}

/// True when a data column already uses the surrogate id's name
pub fn surrogate_id_collides(schema: &Schema) -> bool {
    schema.iter().any(|column| column.name == SURROGATE_ID_NAME)
}

/// INSERT statements in row order. A batch size of 0 emits one statement per row.
pub fn insert_statements(
    table_name: &str,
    schema: &Schema,
    rows: &[Row],
    batch_size: usize,
) -> Vec<String> {
    let columns = schema
        .iter()
        .map(|column| column.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let types: Vec<ColumnType> = schema.iter().map(|column| column.column_type).collect();

    if batch_size == 0 {
        return rows
            .iter()
            .map(|row| {
                format!(
                    "INSERT INTO {} ({}) VALUES {};",
                    table_name,
                    columns,
                    format_row(row, &types)
                )
            })
            .collect();
    }

    rows.chunks(batch_size)
        .map(|batch| {
            let values: Vec<String> = batch.iter().map(|row| format_row(row, &types)).collect();
            format!(
                "INSERT INTO {} ({}) VALUES\n{};",
                table_name,
                columns,
                values.join(",\n")
            )
        })
        .collect()
}

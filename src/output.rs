use crate::config::{parse_batch_size, Config};
use crate::converter::{ConversionReport, Converter};
use crate::error::{Csv2SqlError, Result};
use crate::types::ErrorKind;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Options sent by a desktop or browser shell
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellRequest {
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    #[serde(default, deserialize_with = "lenient_batch_size")]
    pub batch_size: usize,
    #[serde(default)]
    pub with_id: bool,
}

/// Shells send the batch size as a number or as raw form text
fn lenient_batch_size<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => parse_batch_size(&n.to_string()),
        Raw::Text(s) => parse_batch_size(&s),
        Raw::Null(()) => 0,
    })
}

impl ShellRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Csv2SqlError::Usage(format!("invalid request: {}", e)))
    }

    pub fn into_config(self, input_path: &Path) -> Result<Config> {
        Ok(Config::new(input_path, self.table_name, self.output_path)?
            .with_batch_size(self.batch_size)
            .with_surrogate_id(self.with_id))
    }
}

/// Success response JSON structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SuccessResponse {
    pub output_path: String,
    pub table_name: String,
    pub field_separator: String,
    pub charset: String,
    pub batch_size: usize,
    pub with_id: bool,
    pub header_names: Vec<String>,
    pub column_types: Vec<String>,
    pub row_count: usize,
    pub statement_count: usize,
}

impl SuccessResponse {
    pub fn from_report(report: &ConversionReport) -> Self {
        let conversion = &report.conversion;
        SuccessResponse {
            output_path: report.output_path.display().to_string(),
            table_name: conversion.table_name.clone(),
            field_separator: hex_char(conversion.separator),
            charset: report.charset.clone(),
            batch_size: report.batch_size,
            with_id: report.with_id,
            header_names: conversion.header_names(),
            column_types: conversion
                .schema
                .iter()
                .map(|c| c.column_type.to_string())
                .collect(),
            row_count: conversion.row_count,
            statement_count: conversion.statements.len(),
        }
    }
}

/// Error response JSON structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    pub error: ErrorKind,
    pub error_msg_user: String,
    pub error_msg_internal: String,
}

impl ErrorResponse {
    pub fn new(kind: ErrorKind) -> Self {
        ErrorResponse {
            error: kind,
            error_msg_user: kind.message().to_string(),
            error_msg_internal: String::new(),
        }
    }

    pub fn with_internal_message(mut self, msg: String) -> Self {
        self.error_msg_internal = msg;
        self
    }
}

impl From<&Csv2SqlError> for ErrorResponse {
    fn from(error: &Csv2SqlError) -> Self {
        ErrorResponse::new(error.error_kind()).with_internal_message(error.to_string())
    }
}

/// What a shell receives back from one conversion
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ShellResponse {
    Success(SuccessResponse),
    Error(ErrorResponse),
}

impl ShellResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, ShellResponse::Success(_))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl From<Result<ConversionReport>> for ShellResponse {
    fn from(result: Result<ConversionReport>) -> Self {
        match result {
            Ok(report) => ShellResponse::Success(SuccessResponse::from_report(&report)),
            Err(e) => ShellResponse::Error(ErrorResponse::from(&e)),
        }
    }
}

/// Convert a file on behalf of a shell
pub fn run_request(input_path: &Path, request: ShellRequest) -> ShellResponse {
    request
        .into_config(input_path)
        .and_then(|config| Converter::new(config).run())
        .into()
}

/// Separator as a two-digit hex code, e.g. `3B` for `;`
fn hex_char(c: char) -> String {
    format!("{:02X}", c as u32)
}

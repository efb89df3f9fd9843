//! Quote-aware scanner turning raw text into rows of raw fields.

use crate::types::constants::QUOTE;

/// A row of raw, untrimmed fields
pub type Row = Vec<String>;

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Unquoted,
    Quoted,
}

/// What a single transition contributes to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    Nothing,
    Char(char),
    EndField,
    EndRow,
}

/// Result of feeding one character (plus lookahead) to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub mode: Mode,
    pub emission: Emission,
    /// Characters consumed, 2 when the lookahead is part of the token
    pub advance: usize,
}

impl Transition {
    fn new(mode: Mode, emission: Emission, advance: usize) -> Self {
        Transition {
            mode,
            emission,
            advance,
        }
    }
}

/// Pure transition function of the scanner.
pub fn transition(mode: Mode, c: char, lookahead: Option<char>, delimiter: char) -> Transition {
    match mode {
        Mode::Quoted => match (c, lookahead) {
            (QUOTE, Some(QUOTE)) => Transition::new(Mode::Quoted, Emission::Char(QUOTE), 2),
            (QUOTE, _) => Transition::new(Mode::Unquoted, Emission::Nothing, 1),
            _ => Transition::new(Mode::Quoted, Emission::Char(c), 1),
        },
        Mode::Unquoted => match (c, lookahead) {
            (QUOTE, _) => Transition::new(Mode::Quoted, Emission::Nothing, 1),
            (d, _) if d == delimiter => Transition::new(Mode::Unquoted, Emission::EndField, 1),
            ('\r', Some('\n')) => Transition::new(Mode::Unquoted, Emission::EndRow, 2),
            ('\r', _) | ('\n', _) => Transition::new(Mode::Unquoted, Emission::EndRow, 1),
            _ => Transition::new(Mode::Unquoted, Emission::Char(c), 1),
        },
    }
}

/// Rows produced by a scan
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanOutput {
    pub rows: Vec<Row>,
    /// Input ended inside a quoted field
    pub unterminated_quote: bool,
}

/// Character scanner over one input text
#[derive(Debug)]
pub struct Scanner {
    chars: Vec<char>,
    delimiter: char,
    position: usize,
    mode: Mode,
}

impl Scanner {
    pub fn new(text: &str, delimiter: char) -> Self {
        Scanner {
            chars: text.chars().collect(),
            delimiter,
            position: 0,
            mode: Mode::Unquoted,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Consume the whole input
    pub fn scan(mut self) -> ScanOutput {
        let mut output = ScanOutput::default();
        // Empty input has no header row at all; "\n" still yields one empty row
        if self.chars.is_empty() {
            return output;
        }

        let mut row: Row = Vec::new();
        let mut field = String::new();

        while self.position < self.chars.len() {
            let c = self.chars[self.position];
            let lookahead = self.chars.get(self.position + 1).copied();
            let step = transition(self.mode, c, lookahead, self.delimiter);

            match step.emission {
                Emission::Nothing => {}
                Emission::Char(ch) => field.push(ch),
                Emission::EndField => row.push(std::mem::take(&mut field)),
                Emission::EndRow => {
                    row.push(std::mem::take(&mut field));
                    output.rows.push(std::mem::take(&mut row));
                }
            }

            self.mode = step.mode;
            self.position += step.advance;
        }

        row.push(field);
        // A trailing line terminator leaves a lone empty field behind
        let phantom = row.len() == 1 && row[0].is_empty() && !output.rows.is_empty();
        if !phantom {
            output.rows.push(row);
        }

        output.unterminated_quote = self.mode == Mode::Quoted;
        output
    }
}

/// Scan `text` into rows using `delimiter`
pub fn scan(text: &str, delimiter: char) -> ScanOutput {
    Scanner::new(text, delimiter).scan()
}

//! Extended Position Description records.
//!
//! A record is the first four FEN fields followed by `;`-terminated
//! operations, each an opcode and zero or more operands:
//!
//! ```text
//! r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - id "kiwipete"; D1 48; D2 2039;
//! ```
//!
//! `hmvc` and `fmvn` set the position's counters. `D<n> <count>` operations are
//! perft expectations. Perft suites that write six FEN fields before the first
//! `;` are accepted too.

use std::str::FromStr;

use crate::error::ParseError;
use crate::position::Position;

use super::fen;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpdOperation {
    pub opcode: String,
    pub operands: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpdRecord {
    pub position: Position,
    pub operations: Vec<EpdOperation>,
}

impl EpdRecord {
    /// First operation with this opcode.
    pub fn operation(&self, opcode: &str) -> Option<&EpdOperation> {
        self.operations.iter().find(|op| op.opcode == opcode)
    }

    /// The `id` operand, if present.
    pub fn id(&self) -> Option<&str> {
        self.operation("id")
            .and_then(|op| op.operands.first())
            .map(String::as_str)
    }

    /// `(depth, expected leaf count)` pairs from `D<n>` operations, shallowest
    /// first.
    pub fn perft_expectations(&self) -> Vec<(u8, u64)> {
        let mut out: Vec<(u8, u64)> = self
            .operations
            .iter()
            .filter_map(|op| {
                let depth = perft_depth(&op.opcode)?;
                let count = op.operands.first()?.parse().ok()?;
                Some((depth, count))
            })
            .collect();
        out.sort_unstable();
        out
    }
}

fn perft_depth(opcode: &str) -> Option<u8> {
    opcode.strip_prefix('D')?.parse().ok()
}

/// Parse one EPD line.
pub fn parse_epd(line: &str) -> Result<EpdRecord, ParseError> {
    let (fields, rest) = split_fields(line, 4);
    if fields.len() != 4 {
        return Err(ParseError::FieldCount {
            expected: 4,
            found: fields.len(),
        });
    }

    let board = fen::parse_placement(fields[0])?;
    let side = fen::parse_side(fields[1])?;
    let castling = fen::parse_castling(fields[2])?;
    let en_passant = fen::parse_en_passant(fields[3], side)?;

    let mut operations = split_operations(rest)?;
    let (mut halfmove, mut fullmove) = (0, 1);

    // Six-field FEN prefix: the counters arrive as a bogus first operation
    if let Some(first) = operations.first()
        && first.operands.len() == 1
        && let (Ok(h), Ok(f)) = (first.opcode.parse::<u32>(), first.operands[0].parse::<u32>())
    {
        halfmove = h;
        fullmove = f;
        operations.remove(0);
    }

    for op in &operations {
        validate(op)?;
        match op.opcode.as_str() {
            "hmvc" => {
                halfmove = single_operand(op)
                    .ok_or_else(|| ParseError::HalfmoveClock(op.operands.join(" ")))?;
            }
            "fmvn" => {
                fullmove = single_operand(op)
                    .filter(|&n| n >= 1)
                    .ok_or_else(|| ParseError::FullmoveNumber(op.operands.join(" ")))?;
            }
            _ => {}
        }
    }

    let position = fen::assemble(board, side, castling, en_passant, halfmove, fullmove)?;
    Ok(EpdRecord {
        position,
        operations,
    })
}

/// Parse every record in `text`, skipping blank lines and `#` comments.
pub fn read_epd(text: &str) -> Result<Vec<EpdRecord>, ParseError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse_epd)
        .collect()
}

fn single_operand<T: FromStr>(op: &EpdOperation) -> Option<T> {
    match op.operands.as_slice() {
        [value] => value.parse().ok(),
        _ => None,
    }
}

fn validate(op: &EpdOperation) -> Result<(), ParseError> {
    let mut chars = op.opcode.chars();
    let well_formed = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !well_formed {
        return Err(ParseError::EpdOperation(format!(
            "invalid opcode '{}'",
            op.opcode
        )));
    }
    if perft_depth(&op.opcode).is_some() && single_operand::<u64>(op).is_none() {
        return Err(ParseError::EpdOperation(format!(
            "{} needs one node count",
            op.opcode
        )));
    }
    Ok(())
}

/// The first `n` whitespace-separated fields and the unsplit remainder.
fn split_fields(line: &str, n: usize) -> (Vec<&str>, &str) {
    let mut fields = Vec::with_capacity(n);
    let mut rest = line.trim_start();
    while fields.len() < n && !rest.is_empty() {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        fields.push(&rest[..end]);
        rest = rest[end..].trim_start();
    }
    (fields, rest)
}

fn split_operations(text: &str) -> Result<Vec<EpdOperation>, ParseError> {
    let mut operations = Vec::new();
    let mut tokens: Vec<String> = Vec::new();
    let mut token = String::new();
    let mut in_string = false;

    let mut finish_op = |tokens: &mut Vec<String>| {
        if !tokens.is_empty() {
            let opcode = tokens.remove(0);
            operations.push(EpdOperation {
                opcode,
                operands: std::mem::take(tokens),
            });
        }
    };

    for c in text.chars() {
        match c {
            '"' if in_string => {
                tokens.push(std::mem::take(&mut token));
                in_string = false;
            }
            '"' => {
                if !token.is_empty() {
                    tokens.push(std::mem::take(&mut token));
                }
                in_string = true;
            }
            _ if in_string => token.push(c),
            ';' => {
                if !token.is_empty() {
                    tokens.push(std::mem::take(&mut token));
                }
                finish_op(&mut tokens);
            }
            c if c.is_whitespace() => {
                if !token.is_empty() {
                    tokens.push(std::mem::take(&mut token));
                }
            }
            c => token.push(c),
        }
    }
    if in_string {
        return Err(ParseError::EpdOperation("unterminated string".to_string()));
    }
    if !token.is_empty() {
        tokens.push(token);
    }
    finish_op(&mut tokens);
    Ok(operations)
}

#[cfg(test)]
#[path = "epd_tests.rs"]
mod epd_tests;

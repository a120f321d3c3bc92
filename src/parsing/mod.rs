// src/parsing/mod.rs

//! Text entry for complex numbers and operators.
//!
//! Complex values are written as sums of signed terms, each a real number,
//! a bare `i`, or a real number suffixed with `i`: `1`, `-i`, `0.5 + 2i`,
//! `1e-3 - 3.5i`. Operators are either one of the names `I`, `X`, `Y`, `Z`,
//! `H` (any case) or four comma-separated complex values in row-major order.

use crate::core::{Quop, QuopError};
use num_complex::Complex64;
use num_traits::Zero;
use std::str::FromStr;

fn parse_error(input: &str, message: &str) -> QuopError {
    QuopError::Parse {
        input: input.to_string(),
        message: message.to_string(),
    }
}

/// Reads one unsigned term: `i`, `<real>`, or `<real>i`.
fn parse_term(term: &str, input: &str) -> Result<Complex64, QuopError> {
    let t = term.trim();
    if t == "i" {
        return Ok(Complex64::i());
    }
    let (digits, imaginary) = match t.strip_suffix('i') {
        Some(rest) => (rest.trim(), true),
        None => (t, false),
    };
    let value: f64 = digits
        .parse()
        .map_err(|_| parse_error(input, &format!("not a number: {:?}", term.trim())))?;
    if !value.is_finite() {
        return Err(parse_error(input, &format!("not a number: {:?}", term.trim())));
    }
    Ok(if imaginary {
        Complex64::new(0.0, value)
    } else {
        Complex64::new(value, 0.0)
    })
}

/// `true` when a `+`/`-` at this point belongs to an exponent (`1e-3`).
fn is_exponent_sign(pending: &str) -> bool {
    let trimmed = pending.trim_start();
    (pending.ends_with('e') || pending.ends_with('E'))
        && trimmed.starts_with(|ch: char| ch.is_ascii_digit() || ch == '.')
}

/// Parses a complex value such as `0.5 - 2i`.
///
/// Blank terms between operators are skipped and consecutive signs compose
/// (`1 + -2` is `-1`). An all-blank input is an error.
pub fn parse_complex(text: &str) -> Result<Complex64, QuopError> {
    if text.trim().is_empty() {
        return Err(parse_error(text, "empty entry"));
    }

    let mut total = Complex64::zero();
    let mut sign = 1.0;
    let mut pending = String::new();

    for ch in text.chars() {
        if (ch == '+' || ch == '-') && !is_exponent_sign(&pending) {
            if pending.trim().is_empty() {
                if ch == '-' {
                    sign = -sign;
                }
            } else {
                total += parse_term(&pending, text)? * sign;
                sign = if ch == '-' { -1.0 } else { 1.0 };
            }
            pending.clear();
        } else {
            pending.push(ch);
        }
    }
    if !pending.trim().is_empty() {
        total += parse_term(&pending, text)? * sign;
    }
    Ok(total)
}

/// Parses an operator: a gate name or four comma-separated complex entries.
pub fn parse_operator(text: &str) -> Result<Quop, QuopError> {
    match text.trim().to_lowercase().as_str() {
        "i" => return Ok(Quop::identity()),
        "x" => return Ok(Quop::pauli_x()),
        "y" => return Ok(Quop::pauli_y()),
        "z" => return Ok(Quop::pauli_z()),
        "h" => return Ok(Quop::hadamard()),
        _ => {}
    }

    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 4 || parts.iter().any(|p| p.trim().is_empty()) {
        return Err(parse_error(text, "need 4 values"));
    }
    let entries = parts
        .into_iter()
        .map(parse_complex)
        .collect::<Result<Vec<_>, _>>()?;
    Quop::try_from(entries)
}

impl FromStr for Quop {
    type Err = QuopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_operator(s)
    }
}

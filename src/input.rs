//! Instance reader: a count followed by that many integers.
//!
//! The wire form is whitespace-separated text, newline-agnostic: first the
//! element count `n`, then `n` signed integers. Malformed input is reported
//! as an error instead of being read blindly.

use std::io::Read;

use crate::game::TakeEndsGame;

/// Read one instance from a reader (typically stdin).
pub fn read_instance<R: Read>(mut reader: R) -> Result<TakeEndsGame, String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|err| format!("failed to read input: {err}"))?;
    parse_instance(&text)
}

/// Parse one instance from whitespace-separated text.
///
/// Tokens beyond the declared count are ignored, matching stream semantics.
pub fn parse_instance(text: &str) -> Result<TakeEndsGame, String> {
    let mut tokens = text.split_whitespace();

    let count_token = tokens.next().ok_or("missing element count")?;
    let n: usize = count_token
        .parse()
        .map_err(|_| format!("invalid element count '{count_token}'"))?;

    let mut values = Vec::with_capacity(n);
    for seen in 0..n {
        let token = tokens
            .next()
            .ok_or_else(|| format!("expected {n} values, found {seen}"))?;
        let value: i64 = token
            .parse()
            .map_err(|_| format!("invalid value '{token}'"))?;
        values.push(value);
    }

    Ok(TakeEndsGame::new(values))
}

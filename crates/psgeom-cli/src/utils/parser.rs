use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid point '{0}'. Expected three comma-separated numbers (e.g., '32,32,0').")]
    InvalidPoint(String),

    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidSetPair(String),
}

/// Parses `X,Y,Z` into a coordinate triple.
pub fn parse_point(s: &str) -> Result<[f64; 3], ParseError> {
    let coords: Vec<f64> = s
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| ParseError::InvalidPoint(s.to_string()))?;
    match coords.as_slice() {
        [x, y, z] if coords.iter().all(|c| c.is_finite()) => Ok([*x, *y, *z]),
        _ => Err(ParseError::InvalidPoint(s.to_string())),
    }
}

/// Splits `KEY=VALUE` at the first `=`.
pub fn split_set_pair(s: &str) -> Result<(&str, &str), ParseError> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ParseError::InvalidSetPair(s.to_string())),
    }
}

use std::io::BufRead;

#[derive(Debug, thiserror::Error)]
pub enum CapacityError {
    #[error("no capacity value was provided")]
    Missing,
    #[error("capacity '{value}' must be a non-negative integer")]
    Invalid { value: String },
    #[error("failed to read capacity: {0}")]
    Io(#[from] std::io::Error),
}

pub fn parse_capacity(raw: &str) -> Result<usize, CapacityError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CapacityError::Missing);
    }

    trimmed.parse().map_err(|_| CapacityError::Invalid {
        value: trimmed.to_string(),
    })
}

/// Reads the first whitespace-delimited token from `reader` as the seat limit.
pub fn read_capacity<R: BufRead>(reader: R) -> Result<usize, CapacityError> {
    for line in reader.lines() {
        let line = line?;
        if let Some(token) = line.split_whitespace().next() {
            return parse_capacity(token);
        }
    }

    Err(CapacityError::Missing)
}

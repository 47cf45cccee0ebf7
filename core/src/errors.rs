use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SpanpathCoreError {
    #[error("invalid cell '{cell}' in adjacency matrix line {line}")]
    InvalidMatrixCell {
        line: usize,
        cell: String,
        source: ParseIntError,
    },
    #[error("{0} nodes can not be addressed with the alphabetic labels 'a'..'z', the maximum is 26")]
    TooManyNodes(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpanpathCoreError>;

//! Error types for sst_codec
//! sst_codec 错误类型

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("buffer improperly sized to hold requested data: got {got}, expected {expected}")]
  BufUndersized { expected: usize, got: usize },

  #[error("length {value} does not fit in {width} bits")]
  Overflow { value: usize, width: u32 },

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

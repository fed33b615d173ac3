//! Error types for sst_table
//! sst_table 错误类型

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("{0}: file not found")]
  FileNotFound(PathBuf),

  #[error("{path}: TOC too big: {size} bytes")]
  TocTooLarge { path: PathBuf, size: usize },

  #[error("{0}: empty TOC")]
  EmptyToc(PathBuf),

  #[error("{path}: unrecognized TOC component: {name}")]
  UnknownComponent { path: PathBuf, name: Box<str> },

  #[error("invalid summary index: {0}")]
  InvalidSummaryIndex(usize),

  #[error("unable to reverse map: {0}")]
  ReverseMap(Box<str>),

  #[error("sstable not loaded")]
  NotLoaded,

  #[error("codec: {0}")]
  Codec(#[from] sst_codec::Error),

  #[error("compress: {0}")]
  Compress(#[from] sst_compress::Error),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

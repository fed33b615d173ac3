#![cfg_attr(docsrs, feature(doc_cfg))]

//! Compression metadata and chunked decompressing reads
//! 压缩元数据与分块解压读取

mod info;
mod reader;

pub use info::{Compression, Opt};
pub use reader::CompressedReader;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("unknown compressor: {0}")]
  UnknownCodec(Box<str>),

  #[error("chunk length must be positive")]
  ZeroChunkLen,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Chunk compression codec
/// 分块压缩算法
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Codec {
  Lz4,
}

impl Codec {
  /// Resolve from the compressor class name stored in the metadata,
  /// with or without its package prefix
  /// 从元数据中的压缩器类名解析，可带包名前缀
  pub fn from_name(name: &[u8]) -> Result<Self> {
    let Ok(name) = std::str::from_utf8(name) else {
      return Err(Error::UnknownCodec(String::from_utf8_lossy(name).into()));
    };
    let class = name.rsplit('.').next().unwrap_or(name);
    match class {
      "LZ4Compressor" => Ok(Self::Lz4),
      _ => Err(Error::UnknownCodec(name.into())),
    }
  }
}

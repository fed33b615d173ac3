//! Compression metadata record
//! 压缩元数据记录

use sst_codec::{Decode, DiskArray, DiskString, Encode, Sink, Src, record};

use crate::{Codec, Result};

record! {
  /// One compressor option, a key/value string pair
  /// 单个压缩器选项，键值字符串对
  #[derive(Debug, Clone, Default, PartialEq)]
  pub struct Opt {
    pub key: DiskString<u16>,
    pub value: DiskString<u16>,
  }
}

/// Compression metadata: algorithm, options, chunking and chunk offsets.
/// The compressed file length is not on disk; it is recorded once after the
/// data component's size is known.
/// 压缩元数据：算法、选项、分块与块偏移。压缩文件长度不在盘上，
/// 在得知数据组件大小后记录一次。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compression {
  pub name: DiskString<u16>,
  pub options: DiskArray<u32, Opt>,
  pub chunk_len: u32,
  pub data_len: u64,
  pub offsets: DiskArray<u32, u64>,
  compressed_file_length: u64,
}

impl Compression {
  pub fn new(
    name: DiskString<u16>,
    options: DiskArray<u32, Opt>,
    chunk_len: u32,
    data_len: u64,
    offsets: DiskArray<u32, u64>,
  ) -> Self {
    Self {
      name,
      options,
      chunk_len,
      data_len,
      offsets,
      compressed_file_length: 0,
    }
  }

  #[inline]
  pub fn update(&mut self, compressed_file_length: u64) {
    self.compressed_file_length = compressed_file_length;
  }

  #[inline]
  pub fn compressed_file_length(&self) -> u64 {
    self.compressed_file_length
  }

  /// Uncompressed chunk length in bytes
  /// 未压缩的块长度（字节）
  #[inline]
  pub fn chunk_len(&self) -> usize {
    self.chunk_len as usize
  }

  /// Uncompressed length of the data stream
  /// 数据流的未压缩长度
  #[inline]
  pub fn data_len(&self) -> u64 {
    self.data_len
  }

  /// Chunk holding a logical offset, and the offset within that chunk;
  /// callers have ruled out a zero chunk length
  /// 覆盖某逻辑偏移的块及块内偏移；调用方已排除块长度为零
  #[inline]
  pub fn locate(&self, offset: u64) -> (usize, usize) {
    let chunk = self.chunk_len as u64;
    ((offset / chunk) as usize, (offset % chunk) as usize)
  }

  #[inline]
  pub fn codec(&self) -> Result<Codec> {
    Codec::from_name(self.name.as_bytes())
  }
}

impl Decode for Compression {
  async fn decode<R: Src>(r: &mut R) -> sst_codec::Result<Self> {
    let name = DiskString::decode(r).await?;
    let options = DiskArray::decode(r).await?;
    let chunk_len = u32::decode(r).await?;
    let data_len = u64::decode(r).await?;
    let offsets = DiskArray::decode(r).await?;
    Ok(Self {
      name,
      options,
      chunk_len,
      data_len,
      offsets,
      compressed_file_length: 0,
    })
  }
}

impl Encode for Compression {
  async fn encode<W: Sink>(&self, w: &mut W) -> sst_codec::Result<()> {
    self.name.encode(w).await?;
    self.options.encode(w).await?;
    self.chunk_len.encode(w).await?;
    self.data_len.encode(w).await?;
    self.offsets.encode(w).await
  }
}

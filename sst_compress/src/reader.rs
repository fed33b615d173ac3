//! Decompressing reader positioned at a logical offset
//! 按逻辑偏移定位的解压读取器

use std::{io, rc::Rc};

use compio::{
  buf::{IntoInner, IoBuf},
  fs::File,
  io::AsyncReadAtExt,
};
use sst_codec::Src;

use crate::{Codec, Compression, Error, Result};

/// Per-chunk trailer: a 4-byte checksum, skipped rather than verified
/// 每块尾部 4 字节校验和，跳过而不校验
const CHECKSUM_LEN: u64 = 4;

/// Reads the compressed data component, decompressing whole chunks on
/// demand; positions are logical (uncompressed) offsets
/// 读取压缩数据组件，按需整块解压；位置为逻辑（未压缩）偏移
pub struct CompressedReader<'a> {
  file: Rc<File>,
  info: &'a Compression,
  codec: Codec,
  pos: u64,
  chunk: Vec<u8>,
  chunk_start: u64,
  eof: bool,
}

impl<'a> CompressedReader<'a> {
  pub fn new(file: Rc<File>, info: &'a Compression, pos: u64) -> Result<Self> {
    if info.chunk_len == 0 {
      return Err(Error::ZeroChunkLen);
    }
    let codec = info.codec()?;
    Ok(Self {
      file,
      info,
      codec,
      pos,
      chunk: Vec::new(),
      chunk_start: 0,
      eof: false,
    })
  }

  /// Decompress the chunk containing the current logical position
  /// 解压覆盖当前逻辑位置的块
  async fn load_chunk(&mut self) -> io::Result<()> {
    let (idx, within) = self.info.locate(self.pos);
    let Some(&start) = self.info.offsets.li.get(idx) else {
      self.eof = true;
      return Ok(());
    };
    let end = match self.info.offsets.li.get(idx + 1) {
      Some(&next) => next,
      None => self.info.compressed_file_length(),
    };
    let span = end
      .checked_sub(start)
      .and_then(|s| s.checked_sub(CHECKSUM_LEN))
      .ok_or_else(|| io::Error::other("compressed chunk offsets not monotonic"))?
      as usize;

    let buf = vec![0u8; span];
    let slice = buf.slice(0..span);
    let res = self.file.read_exact_at(slice, start).await;
    res.0?;
    let buf = res.1.into_inner();

    self.chunk = match self.codec {
      Codec::Lz4 => {
        lz4_flex::block::decompress(&buf, self.info.chunk_len()).map_err(io::Error::other)?
      }
    };
    self.chunk_start = self.pos - within as u64;
    if within >= self.chunk.len() {
      return Err(io::Error::other("decompressed chunk shorter than expected"));
    }
    Ok(())
  }
}

impl Src for CompressedReader<'_> {
  async fn read_exactly(&mut self, n: usize) -> io::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
      let off = (self.pos.saturating_sub(self.chunk_start)) as usize;
      if self.pos >= self.chunk_start && off < self.chunk.len() {
        let take = (n - out.len()).min(self.chunk.len() - off);
        out.extend_from_slice(&self.chunk[off..off + take]);
        self.pos += take as u64;
        continue;
      }
      if self.eof || self.pos >= self.info.data_len() {
        self.eof = true;
        break;
      }
      self.load_chunk().await?;
    }
    Ok(out)
  }

  fn seek(&mut self, pos: u64) {
    self.pos = pos;
    self.chunk.clear();
    self.chunk_start = 0;
    self.eof = false;
  }

  fn eof(&self) -> bool {
    self.eof
  }
}

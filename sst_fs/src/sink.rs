//! Buffered append-only file sink
//! 缓冲的顺序写文件汇

use std::io;

use compio::{fs::File, io::AsyncWriteAtExt};
use sst_codec::Sink;

/// Accumulates writes and flushes full buffers; `close` syncs the file
/// 累积写入并整批刷盘；`close` 时同步文件
pub struct FileSink {
  file: File,
  buf: Vec<u8>,
  pos: u64,
  buf_size: usize,
}

impl FileSink {
  #[inline]
  pub fn new(file: File, buf_size: usize) -> Self {
    Self {
      file,
      buf: Vec::with_capacity(buf_size),
      pos: 0,
      buf_size,
    }
  }
}

impl Drop for FileSink {
  #[cold]
  fn drop(&mut self) {
    if !self.buf.is_empty() {
      log::warn!("FileSink dropped with pending writes");
    }
  }
}

impl Sink for FileSink {
  async fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
    self.buf.extend_from_slice(data);
    if self.buf.len() >= self.buf_size {
      self.flush().await?;
    }
    Ok(())
  }

  async fn flush(&mut self) -> io::Result<()> {
    if self.buf.is_empty() {
      return Ok(());
    }
    let data = std::mem::take(&mut self.buf);
    let len = data.len();
    self.file.write_all_at(data, self.pos).await.0?;
    self.pos += len as u64;
    Ok(())
  }

  async fn close(&mut self) -> io::Result<()> {
    self.flush().await?;
    self.file.sync_all().await
  }
}

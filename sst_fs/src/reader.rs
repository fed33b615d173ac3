//! Seekable buffered reader over a shared file
//! 共享文件上的可定位缓冲读取器

use std::{io, rc::Rc};

use compio::{BufResult, fs::File, io::AsyncReadAt};
use sst_codec::Src;

use crate::consts::BUF_SIZE;

/// Random-access reader with a private buffer window; per-stream buffer
/// state is not re-entrant, so one reader serves one parse at a time
/// 带私有缓冲窗口的随机访问读取器；缓冲状态不可重入，一个读取器同一时间只服务一次解析
pub struct FileReader {
  file: Rc<File>,
  buf: Vec<u8>,
  start: usize,
  offset: u64,
  buf_size: usize,
  eof: bool,
}

impl FileReader {
  #[inline]
  pub fn new(file: Rc<File>, buf_size: usize) -> Self {
    Self {
      file,
      buf: Vec::new(),
      start: 0,
      offset: 0,
      buf_size,
      eof: false,
    }
  }

  #[inline]
  pub fn with_default_buf(file: Rc<File>) -> Self {
    Self::new(file, BUF_SIZE)
  }

  /// Refill the window from the current file offset
  /// 从当前文件偏移补满缓冲窗口
  async fn fill(&mut self) -> io::Result<()> {
    let buf = Vec::with_capacity(self.buf_size);
    let BufResult(res, buf) = self.file.read_at(buf, self.offset).await;
    let n = res?;
    if n == 0 {
      self.eof = true;
    }
    self.offset += n as u64;
    self.buf = buf;
    self.start = 0;
    Ok(())
  }
}

impl Src for FileReader {
  async fn read_exactly(&mut self, n: usize) -> io::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
      if self.start < self.buf.len() {
        let take = (n - out.len()).min(self.buf.len() - self.start);
        out.extend_from_slice(&self.buf[self.start..self.start + take]);
        self.start += take;
        continue;
      }
      if self.eof {
        break;
      }
      self.fill().await?;
    }
    Ok(out)
  }

  fn seek(&mut self, pos: u64) {
    self.offset = pos;
    self.buf.clear();
    self.start = 0;
    self.eof = false;
  }

  fn eof(&self) -> bool {
    self.eof
  }
}

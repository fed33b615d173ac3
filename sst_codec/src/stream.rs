//! Source and sink capabilities the codec reads through
//! 编解码所依赖的读取与写出能力

use std::io;

/// Seekable byte source with buffered exact reads
/// 可定位的字节源，带缓冲的定量读取
pub trait Src {
  /// Read up to `n` bytes; shorter than `n` only at end of stream
  /// 读取至多 `n` 字节；仅在流结束时返回不足 `n` 字节
  async fn read_exactly(&mut self, n: usize) -> io::Result<Vec<u8>>;

  /// Reposition the stream, dropping any buffered bytes
  /// 重新定位流，丢弃缓冲字节
  fn seek(&mut self, pos: u64);

  /// True once an underlying read came back empty
  /// 底层读取返回空后为真
  fn eof(&self) -> bool;
}

/// Buffered byte sink
/// 缓冲字节写出
pub trait Sink {
  async fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

  async fn flush(&mut self) -> io::Result<()>;

  /// Flush then sync the underlying file
  /// 刷新缓冲并同步底层文件
  async fn close(&mut self) -> io::Result<()>;
}

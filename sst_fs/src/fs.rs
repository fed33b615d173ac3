//! File open helpers
//! 文件打开工具

use std::{io, path::Path};

use compio::fs::{File, OpenOptions};

/// Open file for reading
/// 打开文件用于读取
#[inline]
pub async fn open_read(path: impl AsRef<Path>) -> io::Result<File> {
  OpenOptions::new().read(true).open(path).await
}

/// Open file for writing, create if missing, truncate if present
/// 打开文件用于写入，不存在则创建，存在则截断
#[inline]
pub async fn open_write(path: impl AsRef<Path>) -> io::Result<File> {
  OpenOptions::new()
    .write(true)
    .create(true)
    .truncate(true)
    .open(path)
    .await
}

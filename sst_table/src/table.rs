//! SSTable descriptor and component orchestration
//! SSTable 描述符与组件编排

use std::{
  collections::HashSet,
  io,
  path::{Path, PathBuf},
  rc::Rc,
};

use compio::{BufResult, fs::File, io::AsyncReadAt};
use sst_codec::{Decode, Encode, Sink, Src};
use sst_compress::{CompressedReader, Compression};
use sst_fs::{
  FileReader, FileSink,
  consts::{BUF_SIZE, META_BUF_SIZE},
  open_read, open_write,
};

use crate::{
  Component, Error, Format, Result, Version,
  stats::Statistics,
  summary::Summary,
  types::{Filter, IndexEntry, SummaryEntry},
};

/// One page; a sane TOC is much smaller
/// 一页；正常的 TOC 远小于此
const TOC_PAGE: usize = 4096;

fn remap_not_found(e: io::Error, path: &Path) -> Error {
  if e.kind() == io::ErrorKind::NotFound {
    Error::FileNotFound(path.to_path_buf())
  } else {
    Error::Io(e)
  }
}

/// One immutable sorted string table, identified by directory, version,
/// format and generation; exclusively owns the parsed component records
/// 一个不可变的有序字符串表，由目录、版本、格式与代数标识；
/// 独占持有解析出的组件记录
pub struct SSTable {
  dir: PathBuf,
  generation: u64,
  version: Version,
  format: Format,
  components: HashSet<Component>,
  summary: Summary,
  statistics: Statistics,
  filter: Filter,
  compression: Option<Compression>,
  index_file: Option<Rc<File>>,
  data_file: Option<Rc<File>>,
  data_file_size: u64,
}

impl SSTable {
  pub fn new(dir: impl Into<PathBuf>, generation: u64, version: Version, format: Format) -> Self {
    Self {
      dir: dir.into(),
      generation,
      version,
      format,
      components: HashSet::new(),
      summary: Summary::default(),
      statistics: Statistics::default(),
      filter: Filter::default(),
      compression: None,
      index_file: None,
      data_file: None,
      data_file_size: 0,
    }
  }

  /// `{dir}/{version}-{generation}-{format}-{suffix}`
  pub fn filename(&self, c: Component) -> PathBuf {
    self.dir.join(format!(
      "{}-{}-{}-{}",
      self.version.as_str(),
      self.generation,
      self.format.as_str(),
      c.suffix()
    ))
  }

  #[inline]
  pub fn has_component(&self, c: Component) -> bool {
    self.components.contains(&c)
  }

  #[inline]
  pub fn components(&self) -> &HashSet<Component> {
    &self.components
  }

  #[inline]
  pub fn summary(&self) -> &Summary {
    &self.summary
  }

  #[inline]
  pub fn statistics(&self) -> &Statistics {
    &self.statistics
  }

  #[inline]
  pub fn filter(&self) -> &Filter {
    &self.filter
  }

  #[inline]
  pub fn compression(&self) -> Option<&Compression> {
    self.compression.as_ref()
  }

  #[inline]
  pub fn data_file_size(&self) -> u64 {
    self.data_file_size
  }

  /// Install the filter to be written by [`store`](Self::store)
  /// 设置 [`store`](Self::store) 要写出的过滤器
  #[inline]
  pub fn set_filter(&mut self, filter: Filter) {
    self.filter = filter;
  }

  /// Install compression metadata to be written by [`store`](Self::store)
  /// 设置 [`store`](Self::store) 要写出的压缩元数据
  #[inline]
  pub fn set_compression(&mut self, compression: Compression) {
    self.compression = Some(compression);
  }

  /// Enumerate the components present. The whole file must fit in one
  /// page; reading a full page means something is fishy.
  /// 枚举现存组件。整个文件必须装进一页；读满一页即有问题。
  async fn read_toc(&mut self) -> Result<()> {
    let path = self.filename(Component::Toc);
    log::debug!("reading TOC file {}", path.display());

    let file = open_read(&path).await.map_err(|e| remap_not_found(e, &path))?;
    let buf = Vec::with_capacity(TOC_PAGE);
    let BufResult(res, buf) = file.read_at(buf, 0).await;
    let size = res?;
    if size >= TOC_PAGE {
      return Err(Error::TocTooLarge { path, size });
    }

    for line in buf.split(|&b| b == b'\n') {
      // accept trailing newlines
      // 允许末尾换行
      if line.is_empty() {
        continue;
      }
      let comp = std::str::from_utf8(line)
        .ok()
        .and_then(|s| Component::from_suffix(s).ok());
      match comp {
        Some(c) => {
          self.components.insert(c);
        }
        None => {
          return Err(Error::UnknownComponent {
            path,
            name: String::from_utf8_lossy(line).into(),
          });
        }
      }
    }
    if self.components.is_empty() {
      return Err(Error::EmptyToc(path));
    }
    Ok(())
  }

  async fn read_simple<T: Decode>(&self, c: Component) -> Result<T> {
    let path = self.filename(c);
    log::debug!("reading {} file {}", c.suffix(), path.display());

    let file = open_read(&path).await.map_err(|e| remap_not_found(e, &path))?;
    let mut r = FileReader::new(Rc::new(file), META_BUF_SIZE);
    Ok(T::decode(&mut r).await?)
  }

  async fn write_simple<T: Encode>(&self, c: Component, record: &T) -> Result<()> {
    let path = self.filename(c);
    log::debug!("writing {} file {}", c.suffix(), path.display());

    let file = open_write(&path).await?;
    let mut w = FileSink::new(file, META_BUF_SIZE);
    record.encode(&mut w).await?;
    // the underlying file is synced here
    // 底层文件在此同步
    w.close().await?;
    Ok(())
  }

  async fn open_data(&mut self) -> Result<()> {
    let (index, data) = futures::try_join!(
      open_read(self.filename(Component::Index)),
      open_read(self.filename(Component::Data)),
    )?;
    self.data_file_size = data.metadata().await?.len();
    self.index_file = Some(Rc::new(index));
    self.data_file = Some(Rc::new(data));
    Ok(())
  }

  /// Load every component in dependency order. Statistics comes before
  /// compression so corruption there surfaces before any expensive work;
  /// compression comes before the data file so the reader factory can pick
  /// between the compressed and plain stream.
  /// 按依赖顺序加载各组件。统计先于压缩，使其中的损坏先于昂贵操作暴露；
  /// 压缩先于数据文件，使读取工厂能在压缩流与普通流之间选择。
  pub async fn load(&mut self) -> Result<()> {
    self.read_toc().await?;
    self.statistics = self.read_simple(Component::Statistics).await?;
    if self.has_component(Component::CompressionInfo) {
      self.compression = Some(self.read_simple(Component::CompressionInfo).await?);
    }
    self.filter = self.read_simple(Component::Filter).await?;
    self.summary = self.read_simple(Component::Summary).await?;
    self.open_data().await?;
    if let Some(c) = &mut self.compression {
      c.update(self.data_file_size);
    }
    Ok(())
  }

  /// Write the components this layer owns: compression info, then filter
  /// 写出本层拥有的组件：先压缩元数据，后过滤器
  pub async fn store(&self) -> Result<()> {
    if let Some(c) = &self.compression {
      self.write_simple(Component::CompressionInfo, c).await?;
    }
    self.write_simple(Component::Filter, &self.filter).await
  }

  /// Parse up to `quantity` index entries starting at `position`. A short
  /// read at end of stream ends the batch after the last complete entry;
  /// truncation exactly at an entry boundary cannot be told apart from
  /// truncation inside one here.
  /// 从 `position` 起解析至多 `quantity` 个索引条目。流尾的短读在最后一个
  /// 完整条目后结束本批；恰在条目边界的截断与条目内部的截断在此无法区分。
  pub async fn read_indexes(&self, position: u64, quantity: usize) -> Result<Vec<IndexEntry>> {
    let file = self.index_file.as_ref().ok_or(Error::NotLoaded)?;
    let mut r = FileReader::new(Rc::clone(file), BUF_SIZE);
    r.seek(position);

    let mut indexes = Vec::with_capacity(quantity);
    while indexes.len() < quantity {
      match IndexEntry::decode(&mut r).await {
        Ok(entry) => indexes.push(entry),
        Err(sst_codec::Error::BufUndersized { .. }) if r.eof() => break,
        Err(e) => return Err(e.into()),
      }
    }
    Ok(indexes)
  }

  pub fn read_summary_entry(&self, i: usize) -> Result<&SummaryEntry> {
    self
      .summary
      .entries
      .get(i)
      .ok_or(Error::InvalidSummaryIndex(i))
  }

  /// Stream over the data component starting at a logical offset
  /// 从逻辑偏移开始的数据组件流
  pub fn data_stream_at(&self, pos: u64) -> Result<DataSrc<'_>> {
    let file = self.data_file.as_ref().ok_or(Error::NotLoaded)?;
    Ok(match &self.compression {
      Some(info) => DataSrc::Compressed(CompressedReader::new(Rc::clone(file), info, pos)?),
      None => {
        let mut r = FileReader::new(Rc::clone(file), BUF_SIZE);
        r.seek(pos);
        DataSrc::Plain(r)
      }
    })
  }

  /// One-shot ranged read through the data stream
  /// 经由数据流的一次性区间读取
  pub async fn data_read(&self, pos: u64, len: usize) -> Result<Vec<u8>> {
    let mut stream = self.data_stream_at(pos)?;
    Ok(stream.read_exactly(len).await?)
  }
}

/// Data component stream, plain or transparently decompressing
/// 数据组件流，普通或透明解压
pub enum DataSrc<'a> {
  Plain(FileReader),
  Compressed(CompressedReader<'a>),
}

impl Src for DataSrc<'_> {
  async fn read_exactly(&mut self, n: usize) -> io::Result<Vec<u8>> {
    match self {
      Self::Plain(r) => r.read_exactly(n).await,
      Self::Compressed(r) => r.read_exactly(n).await,
    }
  }

  fn seek(&mut self, pos: u64) {
    match self {
      Self::Plain(r) => r.seek(pos),
      Self::Compressed(r) => r.seek(pos),
    }
  }

  fn eof(&self) -> bool {
    match self {
      Self::Plain(r) => r.eof(),
      Self::Compressed(r) => r.eof(),
    }
  }
}

//! On-disk record shapes for the metadata components
//! 元数据组件的盘上记录形状

use std::hash::{Hash, Hasher};

use sst_codec::{Decode, DiskArray, DiskHash, DiskString, Encode, Result, Sink, Src, record};

record! {
  /// Bloom filter: hash count and bucket words
  /// 布隆过滤器：哈希个数与桶字
  #[derive(Debug, Clone, Default, PartialEq)]
  pub struct Filter {
    pub hashes: u32,
    pub buckets: DiskArray<u32, u64>,
  }
}

record! {
  /// One entry of the Index component
  /// Index 组件的单个条目
  #[derive(Debug, Clone, Default, PartialEq)]
  pub struct IndexEntry {
    pub key: DiskString<u16>,
    pub position: u64,
    pub promoted_index: DiskString<u32>,
  }
}

/// Sparse index entry: raw key bytes and the Index file position
/// 稀疏索引条目：原始键字节与 Index 文件位置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryEntry {
  pub key: Box<[u8]>,
  pub position: u64,
}

record! {
  #[derive(Debug, Clone, Copy, Default, PartialEq)]
  pub struct EhElem {
    pub offset: u64,
    pub bucket: u64,
  }
}

record! {
  /// Histogram with exponentially growing bucket offsets
  /// 桶偏移指数增长的直方图
  #[derive(Debug, Clone, Default, PartialEq)]
  pub struct EstimatedHistogram {
    pub elements: DiskArray<u32, EhElem>,
  }
}

record! {
  /// Locates an entry in the external commit log
  /// 定位外部提交日志中的条目
  #[derive(Debug, Clone, Copy, Default, PartialEq)]
  pub struct ReplayPosition {
    pub segment: u64,
    pub position: u32,
  }
}

/// Histogram bin boundary; equality and hashing go through the bit image
/// so the value can key a hash map
/// 直方图分桶边界；相等与哈希均基于比特表示，可作哈希表键
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bin(pub f64);

impl Eq for Bin {}

impl Hash for Bin {
  fn hash<H: Hasher>(&self, state: &mut H) {
    state.write_u64(self.0.to_bits());
  }
}

impl Decode for Bin {
  async fn decode<R: Src>(r: &mut R) -> Result<Self> {
    Ok(Self(f64::decode(r).await?))
  }
}

impl Encode for Bin {
  async fn encode<W: Sink>(&self, w: &mut W) -> Result<()> {
    self.0.encode(w).await
  }
}

record! {
  #[derive(Debug, Clone, Default, PartialEq)]
  pub struct StreamingHistogram {
    pub max_bin_size: u32,
    pub hash: DiskHash<u32, Bin, u64>,
  }
}

record! {
  /// Partitioner identity and bloom filter chance
  /// 分区器标识与布隆过滤概率
  #[derive(Debug, Clone, Default, PartialEq)]
  pub struct ValidationMetadata {
    pub partitioner: DiskString<u16>,
    pub filter_chance: f64,
  }
}

record! {
  #[derive(Debug, Clone, Default, PartialEq)]
  pub struct CompactionMetadata {
    pub ancestors: DiskArray<u32, u32>,
    pub cardinality: DiskArray<u32, u8>,
  }
}

record! {
  /// Table-wide statistics payload
  /// 表级统计载荷
  #[derive(Debug, Clone, Default, PartialEq)]
  pub struct StatsMetadata {
    pub estimated_row_size: EstimatedHistogram,
    pub estimated_column_count: EstimatedHistogram,
    pub position: ReplayPosition,
    pub min_timestamp: u64,
    pub max_timestamp: u64,
    pub max_local_deletion_time: u32,
    pub compression_ratio: f64,
    pub estimated_tombstone_drop_time: StreamingHistogram,
    pub sstable_level: u32,
    pub repaired_at: u64,
    pub min_column_names: DiskArray<u32, DiskString<u16>>,
    pub max_column_names: DiskArray<u32, DiskString<u16>>,
    pub has_legacy_counter_shards: bool,
  }
}

//! Statistics component: tagged metadata payloads at recorded offsets
//! 统计组件：按记录偏移存放的带标签元数据载荷

use std::collections::HashMap;

use sst_codec::{Decode, DiskHash, Result, Src};

use crate::types::{CompactionMetadata, StatsMetadata, ValidationMetadata};

/// Statistics payload tags as stored on disk
/// 盘上存储的统计载荷标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum MetadataType {
  Validation = 0,
  Compaction = 1,
  Stats = 2,
}

impl MetadataType {
  #[inline]
  pub fn from_tag(tag: u32) -> Option<Self> {
    match tag {
      0 => Some(Self::Validation),
      1 => Some(Self::Compaction),
      2 => Some(Self::Stats),
      _ => None,
    }
  }
}

/// One parsed statistics payload
/// 单个已解析的统计载荷
#[derive(Debug, Clone, PartialEq)]
pub enum Metadata {
  Validation(ValidationMetadata),
  Compaction(CompactionMetadata),
  Stats(StatsMetadata),
}

/// Offsets map plus the payloads parsed through it. The offsets stay keyed
/// by the raw tag: the tag domain on disk is open, and unknown tags must
/// survive parsing to be reported.
/// 偏移表与据此解析出的载荷。偏移表以原始标签为键：
/// 盘上标签域是开放的，未知标签需要留存以便告警。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
  pub hash: DiskHash<u32, u32, u32>,
  pub contents: HashMap<MetadataType, Metadata>,
}

impl Decode for Statistics {
  async fn decode<R: Src>(r: &mut R) -> Result<Self> {
    let hash = DiskHash::<u32, u32, u32>::decode(r).await?;
    let mut contents = HashMap::with_capacity(hash.map.len());
    for (&tag, &offset) in &hash.map {
      r.seek(offset as u64);
      match MetadataType::from_tag(tag) {
        Some(MetadataType::Validation) => {
          let m = ValidationMetadata::decode(r).await?;
          contents.insert(MetadataType::Validation, Metadata::Validation(m));
        }
        Some(MetadataType::Compaction) => {
          let m = CompactionMetadata::decode(r).await?;
          contents.insert(MetadataType::Compaction, Metadata::Compaction(m));
        }
        Some(MetadataType::Stats) => {
          let m = StatsMetadata::decode(r).await?;
          contents.insert(MetadataType::Stats, Metadata::Stats(m));
        }
        None => log::warn!("invalid metadata type in statistics file: {tag}"),
      }
    }
    Ok(Self { hash, contents })
  }
}

//! Two-pass reader for the variable-length summary entries
//! 变长摘要条目的两段式读取

use sst_codec::{Decode, DiskString, Error, Int, Result, Src, check_buf_size, record};

use crate::types::SummaryEntry;

record! {
  /// Fixed summary header
  /// 摘要定长头部
  #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
  pub struct SummaryHeader {
    pub min_index_interval: u32,
    pub size: u32,
    pub memory_size: u64,
    pub sampling_level: u32,
    pub size_at_full_sampling: u32,
  }
}

impl SummaryHeader {
  /// On-disk size: the packed sum of the field widths
  /// 盘上大小：各字段宽度之和
  pub const SIZE: usize = 24;
}

/// The sparse index over the Index component
/// Index 组件之上的稀疏索引
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
  pub header: SummaryHeader,
  pub entries: Vec<SummaryEntry>,
  pub first_key: DiskString<u32>,
  pub last_key: DiskString<u32>,
}

impl Decode for Summary {
  async fn decode<R: Src>(r: &mut R) -> Result<Self> {
    let header = SummaryHeader::decode(r).await?;
    let n = header.size as usize;

    // Laid out in memory byte order, not big-endian; files written on
    // little-endian hosts carry little-endian positions
    // 按内存字节序而非大端存放；小端主机写出的文件中位置即为小端
    let len = n * 4;
    let buf = r.read_exactly(len).await?;
    check_buf_size(&buf, len)?;
    let mut positions: Vec<u32> = buf
      .chunks_exact(4)
      .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
      .collect();

    // Positions index into the block that starts after the header and
    // opens with this very array, so the first entry sits at `4 * size`.
    // The keys are unsized: entry i ends where entry i+1 starts, and
    // appending the block's total size keeps that true for the last one.
    // 位置索引的是头部之后、以本数组开头的内存块，首个条目位于 `4 * size`。
    // 键没有长度字段：条目 i 的终点即条目 i+1 的起点，
    // 追加块总大小使末尾条目同样成立。
    positions.push(header.memory_size as u32);

    r.seek(SummaryHeader::SIZE as u64 + header.memory_size);
    let first_key = DiskString::decode(r).await?;
    let last_key = DiskString::decode(r).await?;

    r.seek(positions[0] as u64 + SummaryHeader::SIZE as u64);
    let mut entries = Vec::with_capacity(n);
    for i in 0..n {
      let pos = positions[i] as usize;
      let next = positions[i + 1] as usize;
      let Some(entry_size) = next.checked_sub(pos) else {
        return Err(Error::BufUndersized {
          expected: pos,
          got: next,
        });
      };

      let buf = r.read_exactly(entry_size).await?;
      check_buf_size(&buf, entry_size)?;

      // The trailing eight bytes are the entry's position in the Index
      // 尾部八字节是该条目在 Index 中的位置
      let Some(key_size) = entry_size.checked_sub(8) else {
        return Err(Error::BufUndersized {
          expected: 8,
          got: entry_size,
        });
      };
      entries.push(SummaryEntry {
        key: buf[..key_size].into(),
        position: <u64 as Int>::from_be_buf(&buf[key_size..]),
      });
    }

    // The positions array has served its purpose; entries carry all we keep
    // positions 数组已完成使命；需要保留的都在 entries 中
    Ok(Self {
      header,
      entries,
      first_key,
      last_key,
    })
  }
}

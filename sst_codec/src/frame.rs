//! Type-driven framing: one parse and one write implementation per shape
//! 类型驱动编解码：每种形状只有一份读写实现

use crate::{Error, Int, Result, Sink, Src};

/// Anything shorter than the size we asked for is corruption
/// 读到的长度短于请求即为损坏
#[inline]
pub fn check_buf_size(buf: &[u8], expected: usize) -> Result<()> {
  if buf.len() < expected {
    return Err(Error::BufUndersized {
      expected,
      got: buf.len(),
    });
  }
  Ok(())
}

/// Decode a record from a random-access source
/// 从随机访问源解码记录
pub trait Decode: Sized {
  async fn decode<R: Src>(r: &mut R) -> Result<Self>;
}

/// Encode a record to a buffered sink, symmetric with [`Decode`]
/// 将记录写出到缓冲汇，与 [`Decode`] 对称
pub trait Encode {
  async fn encode<W: Sink>(&self, w: &mut W) -> Result<()>;
}

/// Array element framing; integers override both paths with a packed run
/// 数组元素编解码；整数以打包方式覆盖两条路径
pub trait Elem: Decode + Encode {
  async fn decode_seq<R: Src>(r: &mut R, n: usize) -> Result<Vec<Self>> {
    let mut li = Vec::with_capacity(n);
    for _ in 0..n {
      li.push(Self::decode(r).await?);
    }
    Ok(li)
  }

  async fn encode_seq<W: Sink>(li: &[Self], w: &mut W) -> Result<()> {
    for el in li {
      el.encode(w).await?;
    }
    Ok(())
  }
}

macro_rules! int_frame {
  ($($t:ty),+) => {
    $(
      impl Decode for $t {
        async fn decode<R: Src>(r: &mut R) -> Result<Self> {
          let buf = r.read_exactly(size_of::<$t>()).await?;
          check_buf_size(&buf, size_of::<$t>())?;
          Ok(<$t as Int>::from_be_buf(&buf))
        }
      }

      impl Encode for $t {
        async fn encode<W: Sink>(&self, w: &mut W) -> Result<()> {
          Ok(w.write_all(&self.to_be_bytes()).await?)
        }
      }

      impl Elem for $t {
        /// The whole run is contiguous big-endian
        /// 整段连续大端存储
        async fn decode_seq<R: Src>(r: &mut R, n: usize) -> Result<Vec<Self>> {
          let size = n * size_of::<$t>();
          let buf = r.read_exactly(size).await?;
          check_buf_size(&buf, size)?;
          Ok(
            buf
              .chunks_exact(size_of::<$t>())
              .map(<$t as Int>::from_be_buf)
              .collect(),
          )
        }

        async fn encode_seq<W: Sink>(li: &[Self], w: &mut W) -> Result<()> {
          let mut out = Vec::with_capacity(li.len() * size_of::<$t>());
          for el in li {
            el.put_be(&mut out);
          }
          Ok(w.write_all(&out).await?)
        }
      }
    )+
  };
}

int_frame!(u8, u16, u32, u64);

impl Decode for f64 {
  /// Endianness applies to the integer image of the bits
  /// 端序作用于比特的整数表示
  async fn decode<R: Src>(r: &mut R) -> Result<Self> {
    let buf = r.read_exactly(8).await?;
    check_buf_size(&buf, 8)?;
    Ok(f64::from_bits(<u64 as Int>::from_be_buf(&buf)))
  }
}

impl Encode for f64 {
  async fn encode<W: Sink>(&self, w: &mut W) -> Result<()> {
    Ok(w.write_all(&self.to_bits().to_be_bytes()).await?)
  }
}

impl Decode for bool {
  async fn decode<R: Src>(r: &mut R) -> Result<Self> {
    Ok(u8::decode(r).await? != 0)
  }
}

impl Encode for bool {
  async fn encode<W: Sink>(&self, w: &mut W) -> Result<()> {
    u8::from(*self).encode(w).await
  }
}

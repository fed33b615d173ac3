use std::{path::PathBuf, rc::Rc};

use sst_codec::{Decode, DiskArray, DiskString, Encode, Sink, Src};
use sst_compress::{Codec, CompressedReader, Compression, Error, Opt};
use sst_fs::{FileReader, FileSink, open_read, open_write};

fn temp_path(name: &str) -> PathBuf {
  let mut p = std::env::temp_dir();
  p.push(format!("sst_compress_test_{}", fastrand::u64(..)));
  p.push(name);
  p
}

const CHUNK: usize = 64;

/// Compressed data layout: one lz4 block per chunk, 4-byte checksum
/// trailer after each
/// 压缩数据布局：每块一个 lz4 block，后跟 4 字节校验和
fn build_compressed(data: &[u8]) -> (Vec<u8>, Compression) {
  let mut file = Vec::new();
  let mut offsets = Vec::new();
  for chunk in data.chunks(CHUNK) {
    offsets.push(file.len() as u64);
    file.extend_from_slice(&lz4_flex::block::compress(chunk));
    // trailer is skipped by the reader, any image will do
    file.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
  }

  let mut info = Compression::new(
    DiskString::from("LZ4Compressor"),
    DiskArray::default(),
    CHUNK as u32,
    data.len() as u64,
    DiskArray::new(offsets),
  );
  info.update(file.len() as u64);
  (file, info)
}

#[test]
fn codec_from_name() {
  assert_eq!(Codec::from_name(b"LZ4Compressor").unwrap(), Codec::Lz4);
  assert_eq!(
    Codec::from_name(b"org.apache.cassandra.io.compress.LZ4Compressor").unwrap(),
    Codec::Lz4
  );
  assert!(matches!(
    Codec::from_name(b"SnappyCompressor"),
    Err(Error::UnknownCodec(_))
  ));
}

#[compio::test]
async fn info_record_roundtrip() {
  let path = temp_path("CompressionInfo.db");
  std::fs::create_dir_all(path.parent().unwrap()).unwrap();

  let info = Compression::new(
    DiskString::from("LZ4Compressor"),
    DiskArray::new(vec![Opt {
      key: DiskString::from("crc_check_chance"),
      value: DiskString::from("1.0"),
    }]),
    65536,
    123456,
    DiskArray::new([0u64, 300, 700]),
  );

  let file = open_write(&path).await.unwrap();
  let mut w = FileSink::new(file, 4096);
  info.encode(&mut w).await.unwrap();
  w.close().await.unwrap();

  let file = open_read(&path).await.unwrap();
  let mut r = FileReader::new(Rc::new(file), 4096);
  let back = Compression::decode(&mut r).await.unwrap();
  assert_eq!(back, info);

  let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[compio::test]
async fn chunked_read_from_start() {
  let path = temp_path("Data.db");
  std::fs::create_dir_all(path.parent().unwrap()).unwrap();

  let data: Vec<u8> = (0..160u32).map(|i| (i * 7 % 256) as u8).collect();
  let (file_bytes, info) = build_compressed(&data);
  std::fs::write(&path, &file_bytes).unwrap();

  let file = Rc::new(open_read(&path).await.unwrap());
  let mut r = CompressedReader::new(file, &info, 0).unwrap();
  let all = r.read_exactly(data.len()).await.unwrap();
  assert_eq!(all, data);

  // reading past the logical end comes back short with eof set
  let tail = r.read_exactly(10).await.unwrap();
  assert!(tail.is_empty());
  assert!(r.eof());

  let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[compio::test]
async fn chunked_read_mid_stream() {
  let path = temp_path("Data.db");
  std::fs::create_dir_all(path.parent().unwrap()).unwrap();

  let data: Vec<u8> = (0..300u32).map(|i| (i % 256) as u8).collect();
  let (file_bytes, info) = build_compressed(&data);
  std::fs::write(&path, &file_bytes).unwrap();

  let file = Rc::new(open_read(&path).await.unwrap());

  // starts inside chunk 1 and spans into chunk 2
  let mut r = CompressedReader::new(Rc::clone(&file), &info, 70).unwrap();
  let mid = r.read_exactly(80).await.unwrap();
  assert_eq!(mid, &data[70..150]);

  // seek back into an earlier chunk
  r.seek(10);
  let early = r.read_exactly(5).await.unwrap();
  assert_eq!(early, &data[10..15]);

  let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[compio::test]
async fn unknown_codec_rejected() {
  let path = temp_path("Data.db");
  std::fs::create_dir_all(path.parent().unwrap()).unwrap();
  std::fs::write(&path, b"").unwrap();

  let info = Compression::new(
    DiskString::from("SnappyCompressor"),
    DiskArray::default(),
    CHUNK as u32,
    0,
    DiskArray::default(),
  );
  let file = Rc::new(open_read(&path).await.unwrap());
  assert!(matches!(
    CompressedReader::new(file, &info, 0),
    Err(Error::UnknownCodec(_))
  ));

  let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

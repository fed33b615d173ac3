/// Default stream buffer size
/// 默认流缓冲大小
pub const BUF_SIZE: usize = 8192;

/// Buffer size for the small metadata components
/// 小型元数据组件的缓冲大小
pub const META_BUF_SIZE: usize = 4096;

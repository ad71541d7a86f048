//! Disk geometry constants for the simple file system.
//!
//! Every constant here is baked in rather than configurable: the volume is
//! always 256 blocks of 1024 bytes, split the same way at every format.

/// Size in bytes of a single block.
pub const BLOCK_BYTES: usize = 1024;
/// Number of blocks on the volume.
pub const BLOCK_COUNT: usize = 256;
/// Number of blocks occupied by the inode table.
pub const INODE_TABLE_BLOCKS: usize = 1;
/// Number of blocks occupied by the free bitmap.
pub const FREE_BITMAP_BLOCKS: usize = 1;
/// Maximum number of files the volume can hold, including the root directory.
pub const MAX_FILES: usize = 256;
/// Maximum length in bytes of a file name, not including NUL padding.
pub const MAX_FILENAME_BYTES: usize = 20;
/// Number of direct block pointers stored in an inode.
pub const DIRECT_POINTERS: usize = 12;
/// Number of block pointers held in a single indirect block.
pub const INDIRECT_POINTERS_PER_BLOCK: usize = BLOCK_BYTES / 4;
/// Total number of data blocks addressable by one inode.
pub const MAX_FILE_BLOCKS: usize = DIRECT_POINTERS + INDIRECT_POINTERS_PER_BLOCK;
/// Maximum file size in bytes.
pub const MAX_FILE_BYTES: usize = MAX_FILE_BLOCKS * BLOCK_BYTES;
/// Inode id of the root directory.
pub const ROOT_INODE_ID: u32 = 0;

/// Fixed block address of the super block.
pub const SUPER_BLOCK_LBA: u32 = 0;
/// Fixed block address of the inode table.
pub const INODE_TABLE_LBA: u32 = 1;
/// Fixed block address of the free bitmap.
pub const FREE_BITMAP_LBA: u32 = 2;
/// Fixed block address of the root directory's inode record.
pub const ROOT_INODE_RECORD_LBA: u32 = 3;
/// Fixed block address of the root directory's first data block.
pub const ROOT_DATA_LBA: u32 = 4;

/// File mode: directory.
pub const MODE_DIR: u32 = 1;
/// File mode: regular file.
pub const MODE_BASIC: u32 = 2;

/// Size in bytes of one directory entry (20-byte name + 4-byte inode id).
pub const DIRECTORY_ENTRY_BYTES: usize = MAX_FILENAME_BYTES + 4;
/// Size in bytes of the directory file, which always holds `MAX_FILES` entries.
pub const DIRECTORY_FILE_BYTES: usize = MAX_FILES * DIRECTORY_ENTRY_BYTES;

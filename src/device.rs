//! Block device façade.
//!
//! A pure I/O boundary over a regular file: whole blocks in, whole blocks out.
//! This module has no notion of super blocks, inodes, or bitmaps — it only
//! knows how to seek to a block index and transfer bytes, in the same style
//! as `BlockGroupDescriptor::read`/`write` in an `ext2`-style layout module,
//! which seek to a computed byte offset and `read_exact`/`write_all` a
//! fixed-size buffer.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::geometry::BLOCK_BYTES;

/// A fixed-geometry block device backed by a single regular file.
pub struct BlockDevice {
    file: File,
    path: PathBuf,
    block_count: usize,
}

impl BlockDevice {
    /// Creates a zero-initialized image of `block_count` blocks of
    /// `BLOCK_BYTES` bytes each, truncating any existing file at `path`.
    pub fn format(path: impl AsRef<Path>, block_count: usize) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        let mut dev = Self {
            file,
            path,
            block_count,
        };
        let zero = vec![0u8; BLOCK_BYTES];
        for lba in 0..block_count {
            dev.write_blocks(lba as u32, 1, &zero)?;
        }
        Ok(dev)
    }

    /// Opens an existing image at `path` without touching its contents.
    pub fn mount(path: impl AsRef<Path>, block_count: usize) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().read(true).write(true).open(&path)?;
        Ok(Self {
            file,
            path,
            block_count,
        })
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Total number of blocks on this device.
    pub fn block_count(&self) -> usize {
        self.block_count
    }

    fn check_range(&self, start: u32, count: usize) -> io::Result<()> {
        if start as usize + count > self.block_count {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "block range [{start}, {}) is out of bounds for a {}-block device",
                    start as usize + count,
                    self.block_count
                ),
            ));
        }
        Ok(())
    }

    /// Reads `count` whole blocks starting at `start` into `buf`.
    ///
    /// `buf` must be exactly `count * BLOCK_BYTES` bytes long.
    pub fn read_blocks(&mut self, start: u32, count: usize, buf: &mut [u8]) -> io::Result<()> {
        self.check_range(start, count)?;
        assert_eq!(buf.len(), count * BLOCK_BYTES, "buffer size mismatch");
        self.file
            .seek(SeekFrom::Start(start as u64 * BLOCK_BYTES as u64))?;
        self.file.read_exact(buf)
    }

    /// Writes `count` whole blocks starting at `start` from `buf`.
    ///
    /// `buf` must be exactly `count * BLOCK_BYTES` bytes long.
    pub fn write_blocks(&mut self, start: u32, count: usize, buf: &[u8]) -> io::Result<()> {
        self.check_range(start, count)?;
        assert_eq!(buf.len(), count * BLOCK_BYTES, "buffer size mismatch");
        self.file
            .seek(SeekFrom::Start(start as u64 * BLOCK_BYTES as u64))?;
        self.file.write_all(buf)?;
        self.file.flush()
    }

    /// Reads a single block into a freshly allocated buffer.
    pub fn read_block(&mut self, lba: u32) -> io::Result<[u8; BLOCK_BYTES]> {
        let mut buf = [0u8; BLOCK_BYTES];
        self.read_blocks(lba, 1, &mut buf)?;
        Ok(buf)
    }

    /// Writes a single block from a fixed-size buffer.
    pub fn write_block(&mut self, lba: u32, buf: &[u8; BLOCK_BYTES]) -> io::Result<()> {
        self.write_blocks(lba, 1, buf)
    }
}

//! The `Volume`: the single in-memory value that owns the device handle and
//! all four caches (super block, free bitmap, inode table, directory, open
//! file table) and implements every public operation in terms of them.
//!
//! This replaces the reference implementation's process-wide mutable
//! globals (`inodeTbl`, `dir`, `oft`, `freeMap`, `dir_ptr`) with fields of
//! one value constructed by [`Volume::format`]/[`Volume::mount`] and
//! threaded through every operation — the same restructuring an `ext2`-style
//! layout module gets when raw structures are wrapped behind methods
//! instead of scattering format logic across free functions that share
//! ambient state.

use std::path::Path;

use crate::bitmap::FreeBitmap;
use crate::device::BlockDevice;
use crate::directory::{pack_name, DirectoryCache};
use crate::error::{Result, SfsError};
use crate::geometry::*;
use crate::inode::{decode_indirect_entry, encode_indirect_entry, Inode, InodeTable};
use crate::open_file::OpenFileTable;
use crate::super_block::SuperBlock;

/// A mounted simple file system volume.
pub struct Volume {
    device: BlockDevice,
    super_block: SuperBlock,
    bitmap: FreeBitmap,
    inode_table: InodeTable,
    directory: DirectoryCache,
    open_files: OpenFileTable,
    dir_cursor: usize,
}

impl Volume {
    /// Formats a fresh volume at `path` and mounts it.
    ///
    /// Writes the super block, reserves blocks 0..4 in the free bitmap,
    /// writes the root directory's inode record (mode=dir, size=0, with its
    /// first data block pre-allocated), and points inode table slot 0 at it.
    /// The root's `size` is deliberately left at 0 even though its first data
    /// block already exists, matching the reference formatter — the very
    /// first directory flush is what grows it.
    pub fn format(path: impl AsRef<Path>) -> Result<Self> {
        let mut device = BlockDevice::format(path, BLOCK_COUNT)?;
        bootstrap_fresh(&mut device)?;
        Self::finish_mount(device)
    }

    /// Mounts an existing volume image at `path` without modifying it.
    pub fn mount(path: impl AsRef<Path>) -> Result<Self> {
        let device = BlockDevice::mount(path, BLOCK_COUNT)?;
        Self::finish_mount(device)
    }

    fn finish_mount(mut device: BlockDevice) -> Result<Self> {
        let inode_table = InodeTable::decode(&device.read_block(INODE_TABLE_LBA)?);
        let bitmap = FreeBitmap::decode(&device.read_block(FREE_BITMAP_LBA)?);
        let super_block = SuperBlock::decode(&device.read_block(SUPER_BLOCK_LBA)?);
        let mut volume = Self {
            device,
            super_block,
            bitmap,
            inode_table,
            directory: DirectoryCache::empty(),
            open_files: OpenFileTable::all_closed(),
            dir_cursor: 0,
        };
        let root_inode = volume.fetch_inode(ROOT_INODE_ID)?;
        volume.open_files.open_root(ROOT_INODE_ID, root_inode.size);
        let mut dir_bytes = [0u8; DIRECTORY_FILE_BYTES];
        volume.read(0, &mut dir_bytes)?;
        volume.directory = DirectoryCache::decode(&dir_bytes);
        Ok(volume)
    }

    /// The volume's super block, as written at format time.
    pub fn super_block(&self) -> &SuperBlock {
        &self.super_block
    }

    /// Number of blocks currently marked reserved in the free bitmap.
    ///
    /// Exposed for tests and diagnostics; not part of the filesystem's
    /// operational surface.
    pub fn reserved_block_count(&self) -> u32 {
        self.bitmap.set_count()
    }

    /// Reads the raw contents of block `lba`.
    ///
    /// Exposed for tests and diagnostics; not part of the filesystem's
    /// operational surface.
    pub fn raw_block(&mut self, lba: u32) -> Result<[u8; BLOCK_BYTES]> {
        Ok(self.device.read_block(lba)?)
    }

    // -- allocator --------------------------------------------------------

    fn alloc_block(&mut self) -> Result<u32> {
        let block = self.bitmap.alloc_lowest().ok_or(SfsError::OutOfSpace)?;
        self.flush_bitmap()?;
        Ok(block)
    }

    fn free_block(&mut self, block: u32) -> Result<()> {
        self.bitmap.free(block);
        self.device.write_block(block, &[0u8; BLOCK_BYTES])?;
        self.flush_bitmap()
    }

    fn flush_bitmap(&mut self) -> Result<()> {
        self.device.write_block(FREE_BITMAP_LBA, &self.bitmap.encode())?;
        Ok(())
    }

    // -- inode table --------------------------------------------------------

    fn fetch_inode(&mut self, id: u32) -> Result<Inode> {
        let block = self.inode_table.get(id).expect("fetch on a free inode slot");
        Ok(Inode::decode(&self.device.read_block(block)?))
    }

    fn store_inode(&mut self, id: u32, inode: &Inode) -> Result<()> {
        let block = self.inode_table.get(id).expect("store on a free inode slot");
        let mut buf = self.device.read_block(block)?;
        inode.encode_into(&mut buf);
        self.device.write_block(block, &buf)?;
        Ok(())
    }

    fn flush_inode_table(&mut self) -> Result<()> {
        self.device.write_block(INODE_TABLE_LBA, &self.inode_table.encode())?;
        Ok(())
    }

    // -- directory ------------------------------------------------------

    fn flush_directory(&mut self) -> Result<()> {
        let bytes = self.directory.encode();
        if let Some(slot) = self.open_files.get_mut(0) {
            slot.write_ptr = 0;
        }
        self.write(0, &bytes)?;
        Ok(())
    }

    // -- block addressing --------------------------------------------------

    /// Resolves the block backing `slot` for a read; `None` means "reads as
    /// zero", never an error.
    fn resolve_for_read(&mut self, inode: &Inode, slot: usize) -> Result<Option<u32>> {
        if slot < DIRECT_POINTERS {
            return Ok(inode.direct[slot]);
        }
        let indirect_slot = slot - DIRECT_POINTERS;
        match inode.indirect {
            None => Ok(None),
            Some(ind_block) => {
                let block = self.device.read_block(ind_block)?;
                Ok(decode_indirect_entry(&block, indirect_slot))
            }
        }
    }

    /// Resolves the block backing `slot` for a write, allocating the indirect
    /// block and/or the data block on demand. Returns `Err(OutOfSpace)` if an
    /// allocation fails partway through.
    fn resolve_for_write(&mut self, inode: &mut Inode, slot: usize) -> Result<u32> {
        if slot < DIRECT_POINTERS {
            if let Some(b) = inode.direct[slot] {
                return Ok(b);
            }
            let b = self.alloc_block()?;
            inode.direct[slot] = Some(b);
            return Ok(b);
        }

        let indirect_slot = slot - DIRECT_POINTERS;
        let ind_block = match inode.indirect {
            Some(b) => b,
            None => {
                let b = self.alloc_block()?;
                self.device.write_block(b, &[0u8; BLOCK_BYTES])?;
                inode.indirect = Some(b);
                b
            }
        };
        let mut ind_buf = self.device.read_block(ind_block)?;
        if let Some(existing) = decode_indirect_entry(&ind_buf, indirect_slot) {
            return Ok(existing);
        }
        let data_block = self.alloc_block()?;
        encode_indirect_entry(&mut ind_buf, indirect_slot, Some(data_block));
        self.device.write_block(ind_block, &ind_buf)?;
        Ok(data_block)
    }

    // -- public operations ---------------------------------------------------

    /// Opens `name`, creating it if it does not already exist in the
    /// directory. Returns the new handle.
    pub fn open(&mut self, name: &[u8]) -> Result<usize> {
        let packed = pack_name(name).ok_or(SfsError::NameTooLong)?;
        if let Some(idx) = self.directory.find(&packed) {
            let inode_id = self.directory.inode_id_at(idx).unwrap();
            if self.open_files.find_by_inode(inode_id).is_some() {
                return Err(SfsError::AlreadyOpen);
            }
            let inode = self.fetch_inode(inode_id)?;
            let fd = self.open_files.find_free().ok_or(SfsError::OutOfSpace)?;
            self.open_files.open(fd, inode_id, 0, inode.size);
            Ok(fd)
        } else {
            self.create_and_open(packed)
        }
    }

    fn create_and_open(&mut self, packed_name: [u8; MAX_FILENAME_BYTES]) -> Result<usize> {
        let inode_id = self.inode_table.find_free().ok_or(SfsError::OutOfSpace)?;
        let dir_idx = self.directory.find_free().ok_or(SfsError::OutOfSpace)?;
        let block = self.alloc_block()?;

        let mut buf = [0u8; BLOCK_BYTES];
        Inode::new_regular().encode_into(&mut buf);
        if let Err(e) = self.device.write_block(block, &buf).map_err(SfsError::from) {
            self.free_block(block).ok();
            return Err(e);
        }

        self.inode_table.reserve(inode_id, block);
        if let Err(e) = self.flush_inode_table() {
            self.inode_table.free(inode_id);
            self.free_block(block).ok();
            return Err(e);
        }

        self.directory.set(dir_idx, packed_name, inode_id);
        if let Err(e) = self.flush_directory() {
            self.directory.erase(dir_idx);
            self.inode_table.free(inode_id);
            self.flush_inode_table().ok();
            self.free_block(block).ok();
            return Err(e);
        }

        match self.open_files.find_free() {
            Some(fd) => {
                self.open_files.open(fd, inode_id, 0, 0);
                Ok(fd)
            }
            None => {
                self.directory.erase(dir_idx);
                self.flush_directory().ok();
                self.inode_table.free(inode_id);
                self.flush_inode_table().ok();
                self.free_block(block).ok();
                Err(SfsError::OutOfSpace)
            }
        }
    }

    /// Closes `fd`. Errs if `fd` is out of range or already closed.
    pub fn close(&mut self, fd: usize) -> Result<()> {
        match self.open_files.get(fd) {
            Some(slot) if slot.is_open() => {
                self.open_files.close(fd);
                Ok(())
            }
            _ => Err(SfsError::NotFound),
        }
    }

    /// Closes every open handle.
    pub fn close_all(&mut self) {
        let handles: Vec<usize> = self.open_files.open_handles().collect();
        for fd in handles {
            self.open_files.close(fd);
        }
    }

    /// Sets `fd`'s read pointer. Errs only if `fd` is out of range.
    pub fn seek_read(&mut self, fd: usize, loc: u32) -> Result<()> {
        let slot = self.open_files.get_mut(fd).ok_or(SfsError::NotFound)?;
        slot.read_ptr = loc;
        Ok(())
    }

    /// Sets `fd`'s write pointer. Errs only if `fd` is out of range.
    pub fn seek_write(&mut self, fd: usize, loc: u32) -> Result<()> {
        let slot = self.open_files.get_mut(fd).ok_or(SfsError::NotFound)?;
        slot.write_ptr = loc;
        Ok(())
    }

    /// Reads into `buf`, returning the number of bytes actually read. Returns
    /// `Ok(0)` (not an error) for an out-of-range or closed `fd`.
    pub fn read(&mut self, fd: usize, buf: &mut [u8]) -> Result<usize> {
        let Some(slot) = self.open_files.get(fd) else {
            return Ok(0);
        };
        if !slot.is_open() {
            return Ok(0);
        }
        let inode_id = slot.inode_id().unwrap();
        let mut pos = slot.read_ptr as usize;
        let inode = self.fetch_inode(inode_id)?;

        let length = buf.len().min(MAX_FILE_BYTES.saturating_sub(pos));
        let mut done = 0;
        while done < length {
            let slot_idx = pos / BLOCK_BYTES;
            let block_num = self.resolve_for_read(&inode, slot_idx)?;
            let within = pos % BLOCK_BYTES;
            let n = (BLOCK_BYTES - within).min(length - done);
            match block_num {
                None => buf[done..done + n].fill(0),
                Some(b) => {
                    let block = self.device.read_block(b)?;
                    buf[done..done + n].copy_from_slice(&block[within..within + n]);
                }
            }
            pos += n;
            done += n;
        }

        if let Some(slot) = self.open_files.get_mut(fd) {
            slot.read_ptr = pos as u32;
        }
        Ok(done)
    }

    /// Writes `buf`, allocating blocks on demand, returning the number of
    /// bytes actually written. Returns `Ok(0)` for an out-of-range `fd`.
    /// If a block allocation fails mid-transfer, returns the partial count
    /// without treating it as an error.
    pub fn write(&mut self, fd: usize, buf: &[u8]) -> Result<usize> {
        let Some(slot) = self.open_files.get(fd) else {
            return Ok(0);
        };
        let inode_id = match slot.inode_id() {
            Some(id) => id,
            None => return Ok(0),
        };
        let mut pos = slot.write_ptr as usize;
        let mut inode = self.fetch_inode(inode_id)?;

        let length = buf.len().min(MAX_FILE_BYTES.saturating_sub(pos));
        let mut done = 0;
        while done < length {
            let slot_idx = pos / BLOCK_BYTES;
            let block_num = match self.resolve_for_write(&mut inode, slot_idx) {
                Ok(b) => b,
                Err(SfsError::OutOfSpace) => break,
                Err(e) => return Err(e),
            };
            let within = pos % BLOCK_BYTES;
            let n = (BLOCK_BYTES - within).min(length - done);
            let mut block = if n < BLOCK_BYTES {
                self.device.read_block(block_num)?
            } else {
                [0u8; BLOCK_BYTES]
            };
            block[within..within + n].copy_from_slice(&buf[done..done + n]);
            self.device.write_block(block_num, &block)?;
            pos += n;
            done += n;
        }

        if pos as u32 > inode.size {
            inode.size = pos as u32;
        }
        self.store_inode(inode_id, &inode)?;
        if let Some(slot) = self.open_files.get_mut(fd) {
            slot.write_ptr = pos as u32;
        }
        Ok(done)
    }

    /// Removes `name`: frees every block reachable from its inode, then the
    /// inode record itself and its directory entry. Closes the file's handle
    /// if it happened to be open.
    pub fn remove(&mut self, name: &[u8]) -> Result<()> {
        let packed = pack_name(name).ok_or(SfsError::NameTooLong)?;
        let idx = self.directory.find(&packed).ok_or(SfsError::NotFound)?;
        let inode_id = self.directory.inode_id_at(idx).unwrap();
        let inode = self.fetch_inode(inode_id)?;

        for ptr in inode.direct.into_iter().flatten() {
            self.free_block(ptr)?;
        }
        if let Some(ind_block) = inode.indirect {
            let ind_buf = self.device.read_block(ind_block)?;
            for i in 0..INDIRECT_POINTERS_PER_BLOCK {
                if let Some(p) = decode_indirect_entry(&ind_buf, i) {
                    self.free_block(p)?;
                }
            }
            self.free_block(ind_block)?;
        }

        let record_block = self
            .inode_table
            .get(inode_id)
            .expect("directory referenced an inode with no table entry");
        self.free_block(record_block)?;
        self.inode_table.free(inode_id);
        self.flush_inode_table()?;

        self.directory.erase(idx);
        self.flush_directory()?;

        if let Some(fd) = self.open_files.find_by_inode(inode_id) {
            self.open_files.close(fd);
        }
        Ok(())
    }

    /// The size in bytes of `name`, looked up directly from its inode.
    pub fn file_size(&mut self, name: &[u8]) -> Result<u32> {
        let packed = pack_name(name).ok_or(SfsError::NameTooLong)?;
        let idx = self.directory.find(&packed).ok_or(SfsError::NotFound)?;
        let inode_id = self.directory.inode_id_at(idx).unwrap();
        Ok(self.fetch_inode(inode_id)?.size)
    }

    /// Returns the next non-empty directory entry's name, advancing the
    /// persistent enumeration cursor. Returns `None` after a full cycle with
    /// no match (the cursor is left where the scan stopped so the next call
    /// retries from the same point).
    pub fn next_name(&mut self) -> Option<[u8; MAX_FILENAME_BYTES]> {
        let (name, cursor) = self.directory.next_name(self.dir_cursor)?;
        self.dir_cursor = cursor;
        Some(name)
    }
}

fn bootstrap_fresh(device: &mut BlockDevice) -> Result<()> {
    let super_block = SuperBlock {
        block_bytes: BLOCK_BYTES as u32,
        block_count: BLOCK_COUNT as u32,
        inode_table_blocks: INODE_TABLE_BLOCKS as u32,
        free_bitmap_blocks: FREE_BITMAP_BLOCKS as u32,
        root_inode_id: ROOT_INODE_ID,
    };
    device.write_block(SUPER_BLOCK_LBA, &super_block.encode())?;

    let mut bitmap = FreeBitmap::empty();
    for b in 0..5 {
        bitmap.reserve(b);
    }
    device.write_block(FREE_BITMAP_LBA, &bitmap.encode())?;

    let root_inode = Inode::new_root(ROOT_DATA_LBA);
    let mut root_block = [0u8; BLOCK_BYTES];
    root_inode.encode_into(&mut root_block);
    device.write_block(ROOT_INODE_RECORD_LBA, &root_block)?;

    let mut inode_table = InodeTable::empty();
    inode_table.reserve(ROOT_INODE_ID, ROOT_INODE_RECORD_LBA);
    device.write_block(INODE_TABLE_LBA, &inode_table.encode())?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "sfs-volume-test-{name}-{}-{}",
            std::process::id(),
            name.len()
        ))
    }

    #[test]
    fn format_lays_out_super_block_and_root() {
        let path = scratch_path("format");
        let mut vol = Volume::format(&path).unwrap();
        let sb = *vol.super_block();
        assert_eq!(sb.block_bytes, 1024);
        assert_eq!(sb.block_count, 256);
        assert_eq!(sb.inode_table_blocks, 1);
        assert_eq!(sb.free_bitmap_blocks, 1);
        assert_eq!(sb.root_inode_id, 0);

        let table_block = vol.raw_block(INODE_TABLE_LBA).unwrap();
        assert_eq!(i32::from_le_bytes(table_block[0..4].try_into().unwrap()), 3);

        let bitmap_block = vol.raw_block(FREE_BITMAP_LBA).unwrap();
        assert_eq!(
            u32::from_le_bytes(bitmap_block[0..4].try_into().unwrap()),
            0xF800_0000
        );

        let root_record = vol.raw_block(ROOT_INODE_RECORD_LBA).unwrap();
        assert_eq!(i32::from_le_bytes(root_record[0..4].try_into().unwrap()), MODE_DIR as i32);
        assert_eq!(i32::from_le_bytes(root_record[8..12].try_into().unwrap()), 4);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn small_write_then_read() {
        let path = scratch_path("small");
        let mut vol = Volume::format(&path).unwrap();
        let fd = vol.open(b"hello.txt").unwrap();
        assert_eq!(vol.write(fd, b"hi").unwrap(), 2);
        vol.close(fd).unwrap();

        let fd2 = vol.open(b"hello.txt").unwrap();
        let mut buf = [0u8; 2];
        assert_eq!(vol.read(fd2, &mut buf).unwrap(), 2);
        assert_eq!(&buf, b"hi");
        assert_eq!(vol.file_size(b"hello.txt").unwrap(), 2);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn cross_block_write_allocates_two_blocks() {
        let path = scratch_path("crossblock");
        let mut vol = Volume::format(&path).unwrap();
        let before = vol.reserved_block_count();
        let fd = vol.open(b"big").unwrap();
        let data = vec![7u8; 1500];
        assert_eq!(vol.write(fd, &data).unwrap(), 1500);
        assert_eq!(vol.reserved_block_count() - before, 1 /* inode */ + 2 /* data */);
        assert_eq!(vol.file_size(b"big").unwrap(), 1500);

        vol.seek_read(fd, 0).unwrap();
        let mut out = vec![0u8; 1500];
        assert_eq!(vol.read(fd, &mut out).unwrap(), 1500);
        assert_eq!(out, data);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn indirect_pointer_write_round_trips() {
        let path = scratch_path("indirect");
        let mut vol = Volume::format(&path).unwrap();
        let fd = vol.open(b"big2").unwrap();
        let data = vec![3u8; 13 * BLOCK_BYTES];
        assert_eq!(vol.write(fd, &data).unwrap(), data.len());

        vol.seek_read(fd, 0).unwrap();
        let mut out = vec![0u8; data.len()];
        assert_eq!(vol.read(fd, &mut out).unwrap(), data.len());
        assert_eq!(out, data);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn seek_and_overwrite_leaves_surrounding_bytes() {
        let path = scratch_path("overwrite");
        let mut vol = Volume::format(&path).unwrap();
        let fd = vol.open(b"f").unwrap();
        let a = vec![b'A'; BLOCK_BYTES];
        assert_eq!(vol.write(fd, &a).unwrap(), BLOCK_BYTES);

        vol.seek_write(fd, 100).unwrap();
        assert_eq!(vol.write(fd, &[b'B'; 10]).unwrap(), 10);

        vol.seek_read(fd, 0).unwrap();
        let mut out = vec![0u8; BLOCK_BYTES];
        vol.read(fd, &mut out).unwrap();
        assert!(out[0..100].iter().all(|&b| b == b'A'));
        assert!(out[100..110].iter().all(|&b| b == b'B'));
        assert!(out[110..].iter().all(|&b| b == b'A'));
        assert_eq!(vol.file_size(b"f").unwrap(), BLOCK_BYTES as u32);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn remove_frees_every_reachable_block() {
        let path = scratch_path("remove");
        let mut vol = Volume::format(&path).unwrap();
        let before = vol.reserved_block_count();
        let fd = vol.open(b"doomed").unwrap();
        vol.write(fd, &vec![1u8; 13 * BLOCK_BYTES]).unwrap();
        vol.close(fd).unwrap();
        vol.remove(b"doomed").unwrap();
        assert_eq!(vol.reserved_block_count(), before);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn remove_missing_name_errors() {
        let path = scratch_path("removemiss");
        let mut vol = Volume::format(&path).unwrap();
        assert!(matches!(vol.remove(b"nope"), Err(SfsError::NotFound)));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn read_past_eof_is_zero_filled() {
        let path = scratch_path("eof");
        let mut vol = Volume::format(&path).unwrap();
        let fd = vol.open(b"short").unwrap();
        vol.write(fd, b"ab").unwrap();
        vol.seek_read(fd, 2).unwrap();
        let mut out = [0xFFu8; 10];
        let n = vol.read(fd, &mut out).unwrap();
        assert_eq!(n, 10);
        assert!(out.iter().all(|&b| b == 0));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn reopening_an_open_file_fails() {
        let path = scratch_path("reopen");
        let mut vol = Volume::format(&path).unwrap();
        let _fd = vol.open(b"x").unwrap();
        assert!(matches!(vol.open(b"x"), Err(SfsError::AlreadyOpen)));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn enumeration_sees_every_created_name_once() {
        let path = scratch_path("enum");
        let mut vol = Volume::format(&path).unwrap();
        for n in [b"a".as_slice(), b"b", b"c"] {
            vol.open(n).unwrap();
        }
        let mut seen = std::collections::HashSet::new();
        while let Some(name) = vol.next_name() {
            if !seen.insert(name) && seen.len() >= 3 {
                break;
            }
        }
        assert!(seen.len() >= 3);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn persistence_across_remount() {
        let path = scratch_path("persist");
        {
            let mut vol = Volume::format(&path).unwrap();
            let fd = vol.open(b"keep.txt").unwrap();
            vol.write(fd, b"persisted").unwrap();
            vol.close(fd).unwrap();
        }
        {
            let mut vol = Volume::mount(&path).unwrap();
            let fd = vol.open(b"keep.txt").unwrap();
            let mut buf = [0u8; 9];
            vol.read(fd, &mut buf).unwrap();
            assert_eq!(&buf, b"persisted");
        }
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn allocator_hands_out_lowest_numbered_block_first() {
        let path = scratch_path("allocdet");
        let mut vol = Volume::format(&path).unwrap();
        // block 5 goes to the new file's inode record; its first data block
        // (direct[0]) is therefore block 6.
        let fd = vol.open(b"grow").unwrap();
        vol.write(fd, &[0u8; BLOCK_BYTES]).unwrap();
        let inode_record = vol.raw_block(5).unwrap();
        let first_pointer = i32::from_le_bytes(inode_record[8..12].try_into().unwrap());
        assert_eq!(first_pointer, 6);
        std::fs::remove_file(&path).ok();
    }
}

//! Inode records and the inode table.
//!
//! An inode is a 15-word record: mode, size, 12 direct pointers, 1 indirect
//! pointer. The inode table (block 1) maps an inode id to the block number
//! holding its record, the same separation of "index" and "record" an
//! `ext2`-style layout keeps between `BlockGroupDescriptor.inode_table_start_addr`
//! and the inode records it points into.

use crate::geometry::{BLOCK_BYTES, DIRECT_POINTERS, MAX_FILES, MODE_BASIC, MODE_DIR};

/// A pointer value of 0 or less means "not allocated" on disk; in memory this
/// is made explicit with `Option<u32>`.
fn decode_ptr(v: i32) -> Option<u32> {
    if v > 0 {
        Some(v as u32)
    } else {
        None
    }
}

fn encode_ptr(v: Option<u32>) -> i32 {
    v.map(|b| b as i32).unwrap_or(0)
}

/// The file type recorded in an inode's mode word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    Directory,
    Regular,
}

impl FileMode {
    fn decode(word: i32) -> Self {
        if word == MODE_DIR as i32 {
            FileMode::Directory
        } else {
            FileMode::Regular
        }
    }

    fn encode(self) -> i32 {
        match self {
            FileMode::Directory => MODE_DIR as i32,
            FileMode::Regular => MODE_BASIC as i32,
        }
    }
}

/// An in-memory inode record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inode {
    pub mode: FileMode,
    pub size: u32,
    pub direct: [Option<u32>; DIRECT_POINTERS],
    pub indirect: Option<u32>,
}

impl Inode {
    /// A fresh, empty regular file inode.
    pub fn new_regular() -> Self {
        Self {
            mode: FileMode::Regular,
            size: 0,
            direct: [None; DIRECT_POINTERS],
            indirect: None,
        }
    }

    /// A fresh, empty directory inode with one data block already allocated.
    pub fn new_root(first_block: u32) -> Self {
        let mut direct = [None; DIRECT_POINTERS];
        direct[0] = Some(first_block);
        Self {
            mode: FileMode::Directory,
            size: 0,
            direct,
            indirect: None,
        }
    }

    /// Decodes an inode from its backing block. Words beyond word 14 are
    /// preserved by the caller, not by this function — it only reads the
    /// fields it understands.
    pub fn decode(block: &[u8; BLOCK_BYTES]) -> Self {
        let mode = FileMode::decode(read_i32(block, 0));
        let size = read_i32(block, 1).max(0) as u32;
        let mut direct = [None; DIRECT_POINTERS];
        for (i, ptr) in direct.iter_mut().enumerate() {
            *ptr = decode_ptr(read_i32(block, 2 + i));
        }
        let indirect = decode_ptr(read_i32(block, 2 + DIRECT_POINTERS));
        Self {
            mode,
            size,
            direct,
            indirect,
        }
    }

    /// Encodes this inode into `block`, preserving any trailing bytes past
    /// word 14 already present in the buffer (read-modify-write).
    pub fn encode_into(&self, block: &mut [u8; BLOCK_BYTES]) {
        write_i32(block, 0, self.mode.encode());
        write_i32(block, 1, self.size as i32);
        for (i, ptr) in self.direct.iter().enumerate() {
            write_i32(block, 2 + i, encode_ptr(*ptr));
        }
        write_i32(block, 2 + DIRECT_POINTERS, encode_ptr(self.indirect));
    }
}

/// Reads the `index`-th pointer out of an indirect block (256 little-endian
/// words, one per data block it can reference).
pub fn decode_indirect_entry(block: &[u8; BLOCK_BYTES], index: usize) -> Option<u32> {
    decode_ptr(read_i32(block, index))
}

/// Writes `value` as the `index`-th pointer of an indirect block.
pub fn encode_indirect_entry(block: &mut [u8; BLOCK_BYTES], index: usize, value: Option<u32>) {
    write_i32(block, index, encode_ptr(value));
}

fn read_i32(block: &[u8; BLOCK_BYTES], word: usize) -> i32 {
    let off = word * 4;
    i32::from_le_bytes(block[off..off + 4].try_into().unwrap())
}

fn write_i32(block: &mut [u8; BLOCK_BYTES], word: usize, value: i32) {
    let off = word * 4;
    block[off..off + 4].copy_from_slice(&value.to_le_bytes());
}

/// In-memory mirror of the inode table (block 1): for each inode id, the
/// block number holding its record, or `None` if the id is free.
#[derive(Debug, Clone)]
pub struct InodeTable {
    slots: [Option<u32>; MAX_FILES],
}

impl InodeTable {
    /// An inode table with every slot free.
    pub fn empty() -> Self {
        Self {
            slots: [None; MAX_FILES],
        }
    }

    /// Decodes the table from its on-disk block.
    pub fn decode(block: &[u8; BLOCK_BYTES]) -> Self {
        let mut slots = [None; MAX_FILES];
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = decode_ptr(read_i32(block, i));
        }
        Self { slots }
    }

    /// Encodes the table into a block buffer.
    pub fn encode(&self) -> [u8; BLOCK_BYTES] {
        let mut block = [0u8; BLOCK_BYTES];
        for (i, slot) in self.slots.iter().enumerate() {
            write_i32(&mut block, i, encode_ptr(*slot));
        }
        block
    }

    /// The block number holding inode `id`'s record, if it is in use.
    pub fn get(&self, id: u32) -> Option<u32> {
        self.slots.get(id as usize).copied().flatten()
    }

    /// Records that inode `id`'s record now lives at `block`.
    pub fn reserve(&mut self, id: u32, block: u32) {
        self.slots[id as usize] = Some(block);
    }

    /// Frees inode `id`'s slot.
    pub fn free(&mut self, id: u32) {
        self.slots[id as usize] = None;
    }

    /// The lowest free inode id, if any.
    pub fn find_free(&self) -> Option<u32> {
        self.slots.iter().position(|s| s.is_none()).map(|i| i as u32)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn inode_round_trips() {
        let mut inode = Inode::new_regular();
        inode.size = 42;
        inode.direct[0] = Some(7);
        inode.indirect = Some(99);
        let mut block = [0u8; BLOCK_BYTES];
        inode.encode_into(&mut block);
        assert_eq!(Inode::decode(&block), inode);
    }

    #[test]
    fn root_inode_has_first_block_set() {
        let inode = Inode::new_root(4);
        assert_eq!(inode.mode, FileMode::Directory);
        assert_eq!(inode.direct[0], Some(4));
        assert_eq!(inode.size, 0);
    }

    #[test]
    fn encode_preserves_trailing_bytes() {
        let inode = Inode::new_regular();
        let mut block = [0xAAu8; BLOCK_BYTES];
        inode.encode_into(&mut block);
        assert!(block[15 * 4..].iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn inode_table_tracks_free_slots() {
        let mut table = InodeTable::empty();
        assert_eq!(table.find_free(), Some(0));
        table.reserve(0, 3);
        assert_eq!(table.get(0), Some(3));
        assert_eq!(table.find_free(), Some(1));
        table.free(0);
        assert_eq!(table.get(0), None);
        assert_eq!(table.find_free(), Some(0));
    }

    #[test]
    fn inode_table_round_trips() {
        let mut table = InodeTable::empty();
        table.reserve(0, 3);
        table.reserve(5, 17);
        let decoded = InodeTable::decode(&table.encode());
        assert_eq!(decoded.get(0), Some(3));
        assert_eq!(decoded.get(5), Some(17));
        assert_eq!(decoded.get(1), None);
    }
}

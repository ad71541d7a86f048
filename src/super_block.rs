//! On-disk super block: the first five little-endian 32-bit words of block 0,
//! zeros after. Encoding/decoding is explicit word-at-a-time, in the style of
//! a `Superblock::read`/`write` pair in an `ext2`-style layout module, but
//! without that struct's raw-pointer `repr(C, packed)` cast — endianness is
//! made explicit instead of relying on the host's native layout.

use crate::geometry::BLOCK_BYTES;

/// Volume-wide geometry, written once at format time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuperBlock {
    /// Size in bytes of a block.
    pub block_bytes: u32,
    /// Total number of blocks on the volume.
    pub block_count: u32,
    /// Number of blocks occupied by the inode table.
    pub inode_table_blocks: u32,
    /// Number of blocks occupied by the free bitmap.
    pub free_bitmap_blocks: u32,
    /// Inode id of the root directory.
    pub root_inode_id: u32,
}

impl SuperBlock {
    /// Decodes a super block from a raw block buffer.
    pub fn decode(block: &[u8; BLOCK_BYTES]) -> Self {
        Self {
            block_bytes: read_u32(block, 0),
            block_count: read_u32(block, 1),
            inode_table_blocks: read_u32(block, 2),
            free_bitmap_blocks: read_u32(block, 3),
            root_inode_id: read_u32(block, 4),
        }
    }

    /// Encodes this super block into a freshly zeroed block buffer.
    pub fn encode(&self) -> [u8; BLOCK_BYTES] {
        let mut block = [0u8; BLOCK_BYTES];
        write_u32(&mut block, 0, self.block_bytes);
        write_u32(&mut block, 1, self.block_count);
        write_u32(&mut block, 2, self.inode_table_blocks);
        write_u32(&mut block, 3, self.free_bitmap_blocks);
        write_u32(&mut block, 4, self.root_inode_id);
        block
    }
}

fn read_u32(block: &[u8; BLOCK_BYTES], word: usize) -> u32 {
    let off = word * 4;
    u32::from_le_bytes(block[off..off + 4].try_into().unwrap())
}

fn write_u32(block: &mut [u8; BLOCK_BYTES], word: usize, value: u32) {
    let off = word * 4;
    block[off..off + 4].copy_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::*;

    #[test]
    fn round_trips_through_encode_decode() {
        let sb = SuperBlock {
            block_bytes: BLOCK_BYTES as u32,
            block_count: BLOCK_COUNT as u32,
            inode_table_blocks: INODE_TABLE_BLOCKS as u32,
            free_bitmap_blocks: FREE_BITMAP_BLOCKS as u32,
            root_inode_id: ROOT_INODE_ID,
        };
        assert_eq!(SuperBlock::decode(&sb.encode()), sb);
    }

    #[test]
    fn tail_of_block_is_zero() {
        let sb = SuperBlock {
            block_bytes: 1024,
            block_count: 256,
            inode_table_blocks: 1,
            free_bitmap_blocks: 1,
            root_inode_id: 0,
        };
        let block = sb.encode();
        assert!(block[20..].iter().all(|&b| b == 0));
    }
}

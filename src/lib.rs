//! A simple, single-volume, flat-namespace file system over a fixed
//! 256-block x 1024-byte backing store, addressed with classic Unix-style
//! indexed allocation (12 direct pointers plus one single-indirect block per
//! inode).
//!
//! ```text
//! block 0   super block        geometry constants, written once at format
//! block 1   inode table        MAX_FILES slots, inode id -> record block
//! block 2   free bitmap        256 bits, one per block, MSB-first per word
//! block 3   root inode record  inode id 0, mode=dir
//! block 4.. root directory data, then every other file's inodes and data
//! ```
//!
//! The root directory is itself an ordinary file owned by inode 0: the
//! directory table is read and written through the same block-addressing
//! path as any other file's content, rather than through special-cased
//! directory I/O. [`volume::Volume`] is the value that ties the on-disk
//! layout to the in-memory caches (inode table, free bitmap, directory,
//! open file table) that make every operation a handful of field accesses
//! instead of a fresh disk scan.
//!
//! The [`api`] module layers the historical C-shaped entry points
//! (`mksfs`, `sfs_fopen`, ...) on top of one process-wide [`volume::Volume`]
//! for callers that want that surface; new code should prefer driving
//! [`volume::Volume`] directly.

pub mod api;
pub mod bitmap;
pub mod device;
pub mod directory;
pub mod error;
pub mod geometry;
pub mod inode;
pub mod open_file;
pub mod super_block;
pub mod volume;

pub use error::{Result, SfsError};
pub use volume::Volume;

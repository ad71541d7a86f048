//! C-shaped veneer (`mksfs`, `sfs_fopen`, ...) over one process-wide
//! [`Volume`].
//!
//! This mirrors the global-state surface the reference `sfs_api.c`
//! exposes — a single file system mounted for the life of the process,
//! operated on through free functions rather than a value threaded by the
//! caller — while keeping the actual logic in [`Volume`], which any new
//! caller should prefer driving directly. The singleton is guarded with a
//! `OnceLock` for first-time init plus a `Mutex` for the handful of
//! operations that mutate it, rather than `unsafe` statics.
//!
//! Every function here returns the legacy sentinel convention: `0` or a
//! non-negative count/handle for success, `-1` for failure. Richer
//! [`crate::error::SfsError`] information is available from [`Volume`]
//! directly and is discarded at this boundary, matching the original
//! `int`-only signatures.

use std::ffi::{c_char, c_int};
use std::sync::{Mutex, OnceLock};

use crate::geometry::MAX_FILENAME_BYTES;
use crate::volume::Volume;

const DEFAULT_IMAGE_NAME: &str = "sfs";

static VOLUME: OnceLock<Mutex<Option<Volume>>> = OnceLock::new();

fn cell() -> &'static Mutex<Option<Volume>> {
    VOLUME.get_or_init(|| Mutex::new(None))
}

/// Formats (if `fresh != 0`) or mounts the on-disk image at the default
/// path and installs it as the process-wide volume.
pub fn mksfs(fresh: c_int) -> c_int {
    let result = if fresh != 0 {
        Volume::format(DEFAULT_IMAGE_NAME)
    } else {
        Volume::mount(DEFAULT_IMAGE_NAME)
    };
    let mut slot = cell().lock().unwrap();
    match result {
        Ok(volume) => {
            *slot = Some(volume);
            0
        }
        Err(_) => -1,
    }
}

fn with_volume<T>(default: T, f: impl FnOnce(&mut Volume) -> T) -> T {
    let mut slot = cell().lock().unwrap();
    match slot.as_mut() {
        Some(volume) => f(volume),
        None => default,
    }
}

/// Opens (creating if needed) the named file. Returns the new handle, or
/// `-1` if the name is invalid, every slot is full, or the file is already
/// open.
///
/// # Safety
/// `name` must point to a NUL-terminated, valid UTF-8-or-not byte string
/// readable for at least as many bytes as its first NUL.
pub unsafe fn sfs_fopen(name: *const c_char) -> c_int {
    let bytes = unsafe { c_str_bytes(name) };
    with_volume(-1, |v| v.open(bytes).map(|fd| fd as c_int).unwrap_or(-1))
}

/// Closes `fd`. Returns `0` on success, `-1` if `fd` was not open.
pub fn sfs_fclose(fd: c_int) -> c_int {
    if fd < 0 {
        return -1;
    }
    with_volume(-1, |v| v.close(fd as usize).map(|_| 0).unwrap_or(-1))
}

/// Moves `fd`'s read pointer to `loc`. Returns `0` on success, `-1` if `fd`
/// is out of range.
pub fn sfs_frseek(fd: c_int, loc: c_int) -> c_int {
    if fd < 0 || loc < 0 {
        return -1;
    }
    with_volume(-1, |v| {
        v.seek_read(fd as usize, loc as u32).map(|_| 0).unwrap_or(-1)
    })
}

/// Moves `fd`'s write pointer to `loc`. Returns `0` on success, `-1` if
/// `fd` is out of range.
pub fn sfs_fwseek(fd: c_int, loc: c_int) -> c_int {
    if fd < 0 || loc < 0 {
        return -1;
    }
    with_volume(-1, |v| {
        v.seek_write(fd as usize, loc as u32).map(|_| 0).unwrap_or(-1)
    })
}

/// Reads up to `length` bytes from `fd` into `buf`. Returns the number of
/// bytes actually transferred (`0` if `fd` is not open).
///
/// # Safety
/// `buf` must be valid for writes of at least `length` bytes.
pub unsafe fn sfs_fread(fd: c_int, buf: *mut c_char, length: c_int) -> c_int {
    if fd < 0 || length < 0 {
        return 0;
    }
    let slice = unsafe { std::slice::from_raw_parts_mut(buf as *mut u8, length as usize) };
    with_volume(0, |v| v.read(fd as usize, slice).unwrap_or(0) as c_int)
}

/// Writes `length` bytes from `buf` into `fd`, allocating blocks on demand.
/// Returns the number of bytes actually transferred.
///
/// # Safety
/// `buf` must be valid for reads of at least `length` bytes.
pub unsafe fn sfs_fwrite(fd: c_int, buf: *const c_char, length: c_int) -> c_int {
    if fd < 0 || length < 0 {
        return 0;
    }
    let slice = unsafe { std::slice::from_raw_parts(buf as *const u8, length as usize) };
    with_volume(0, |v| v.write(fd as usize, slice).unwrap_or(0) as c_int)
}

/// Removes the named file. Returns `0` on success, `-1` if it does not
/// exist.
///
/// # Safety
/// `name` must point to a NUL-terminated byte string.
pub unsafe fn sfs_remove(name: *const c_char) -> c_int {
    let bytes = unsafe { c_str_bytes(name) };
    with_volume(-1, |v| v.remove(bytes).map(|_| 0).unwrap_or(-1))
}

/// Returns the size in bytes of the named file, or `-1` if it does not
/// exist.
///
/// # Safety
/// `name` must point to a NUL-terminated byte string.
pub unsafe fn sfs_getfilesize(name: *const c_char) -> c_int {
    let bytes = unsafe { c_str_bytes(name) };
    with_volume(-1, |v| v.file_size(bytes).map(|s| s as c_int).unwrap_or(-1))
}

/// Places the next directory entry's name (NUL-padded to
/// `MAX_FILENAME_BYTES`) into `fname`. Returns `0` on success, `-1` once
/// every entry has been seen (until the cursor wraps again).
///
/// # Safety
/// `fname` must be valid for writes of at least `MAX_FILENAME_BYTES` bytes.
pub unsafe fn sfs_getnextfilename(fname: *mut c_char) -> c_int {
    with_volume(-1, |v| match v.next_name() {
        Some(name) => {
            let out =
                unsafe { std::slice::from_raw_parts_mut(fname as *mut u8, MAX_FILENAME_BYTES) };
            out.copy_from_slice(&name);
            0
        }
        None => -1,
    })
}

/// Closes every open handle and drops the process-wide volume, as the last
/// step of a process's lifetime with the file system.
pub fn closesfs() {
    let mut slot = cell().lock().unwrap();
    if let Some(v) = slot.as_mut() {
        v.close_all();
    }
    *slot = None;
}

unsafe fn c_str_bytes<'a>(ptr: *const c_char) -> &'a [u8] {
    unsafe { std::ffi::CStr::from_ptr(ptr).to_bytes() }
}

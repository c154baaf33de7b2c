// statvfs(2) implementation of the filesystem statter

use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use super::{FilesystemStatter, FsBlockStats};

pub struct StatvfsStatter;

impl FilesystemStatter for StatvfsStatter {
    fn block_stats(&self, path: &Path) -> io::Result<FsBlockStats> {
        let c_path = CString::new(path.as_os_str().as_bytes())
            .map_err(|_| io::Error::from(io::ErrorKind::InvalidInput))?;
        let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
        let ret = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
        if ret != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(FsBlockStats {
            blocks: stat.f_blocks as u64,
            blocks_free: stat.f_bfree as u64,
            blocks_avail: stat.f_bavail as u64,
            block_size: stat.f_frsize as u64,
        })
    }
}

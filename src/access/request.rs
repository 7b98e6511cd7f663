//! Open requests: requested access, share mode and creation disposition.

use std::io;

/// Access requested by the opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAccess {
    Read,
    Write,
    ReadWrite,
}

impl FileAccess {
    pub fn reads(self) -> bool {
        matches!(self, FileAccess::Read | FileAccess::ReadWrite)
    }

    pub fn writes(self) -> bool {
        matches!(self, FileAccess::Write | FileAccess::ReadWrite)
    }
}

/// Access other openers may have while this handle is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileShare {
    pub read: bool,
    pub write: bool,
    pub delete: bool,
}

impl FileShare {
    pub const NONE: FileShare = FileShare { read: false, write: false, delete: false };
    pub const READ: FileShare = FileShare { read: true, write: false, delete: false };
    pub const WRITE: FileShare = FileShare { read: false, write: true, delete: false };
    pub const READ_WRITE: FileShare = FileShare { read: true, write: true, delete: false };
    pub const DELETE: FileShare = FileShare { read: false, write: false, delete: true };

    pub fn union(self, other: FileShare) -> FileShare {
        FileShare {
            read: self.read || other.read,
            write: self.write || other.write,
            delete: self.delete || other.delete,
        }
    }
}

/// What to do when the file does or does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationDisposition {
    /// Create; fail if it exists.
    CreateNew,
    /// Create, truncating any existing file.
    CreateAlways,
    /// Open; fail if missing.
    OpenExisting,
    /// Open, creating it if missing.
    OpenAlways,
    /// Open and truncate; fail if missing.
    TruncateExisting,
}

impl CreationDisposition {
    pub fn creates(self) -> bool {
        matches!(
            self,
            CreationDisposition::CreateNew | CreationDisposition::CreateAlways | CreationDisposition::OpenAlways
        )
    }

    pub fn truncates(self) -> bool {
        matches!(self, CreationDisposition::CreateAlways | CreationDisposition::TruncateExisting)
    }
}

/// The access/share/disposition triple used for every attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenRequest {
    pub access: FileAccess,
    pub share: FileShare,
    pub disposition: CreationDisposition,
}

impl OpenRequest {
    pub fn new(access: FileAccess, share: FileShare, disposition: CreationDisposition) -> Self {
        Self { access, share, disposition }
    }

    /// Open an existing file for reading while allowing other readers.
    pub fn shared_read() -> Self {
        Self::new(FileAccess::Read, FileShare::READ, CreationDisposition::OpenExisting)
    }

    /// Open an existing file with the given access and no sharing.
    pub fn exclusive(access: FileAccess) -> Self {
        Self::new(access, FileShare::NONE, CreationDisposition::OpenExisting)
    }

    /// Creating or truncating needs write access; checked before touching the file system.
    pub(crate) fn check(&self) -> io::Result<()> {
        if (self.disposition.creates() || self.disposition.truncates()) && !self.access.writes() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{:?} requires write access", self.disposition),
            ));
        }
        Ok(())
    }
}

impl Default for OpenRequest {
    fn default() -> Self {
        Self::shared_read()
    }
}

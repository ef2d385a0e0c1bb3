use std::path::PathBuf;

use crate::utils::AddressFault;

error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        InvalidAddress(addr: String, fault: AddressFault) {
            description("invalid MAC address")
            display("{} {}", addr, fault)
        }

        UnknownVendor(prefix: String) {
            description("prefix is not registered")
            display("Prefix {} is not registered", prefix)
        }

        SourceUnavailable(url: String) {
            description("vendor registry unavailable")
            display("Failed to fetch vendor registry from {}", url)
        }

        CacheWriteFailure(path: PathBuf) {
            description("failed to write vendor cache")
            display("Failed to write vendor cache {}", path.display())
        }

        CacheReadFailure(path: PathBuf) {
            description("failed to read vendor cache")
            display("Failed to read vendor cache {}", path.display())
        }

        Config(msg: String) {
            description("invalid configuration")
            display("Invalid configuration: {}", msg)
        }
    }
}

impl ErrorKind {
    /// Process exit status for command line front ends.
    pub fn exit_code(&self) -> i32 {
        match *self {
            ErrorKind::InvalidAddress(..) => 1,
            ErrorKind::UnknownVendor(..) => 2,
            _ => 3,
        }
    }
}

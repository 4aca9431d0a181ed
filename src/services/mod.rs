mod spec_store_filesystem;

pub use spec_store_filesystem::FilesystemSpecStore;

mod isusm;

pub use isusm::isusm_download;

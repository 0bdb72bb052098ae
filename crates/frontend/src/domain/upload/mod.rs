mod page;

pub use page::UploadPage;

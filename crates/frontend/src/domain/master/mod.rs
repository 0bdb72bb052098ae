mod page;

pub use page::MasterPage;

mod page;

pub use page::IssuesPage;

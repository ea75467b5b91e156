pub mod store;

pub use store::MemoryCatalog;

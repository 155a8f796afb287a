mod store;
mod store_json;
mod store_memory;

pub use store::Store;
pub use store_json::JsonStore;
pub use store_memory::MemoryStore;

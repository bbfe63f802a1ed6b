mod lookup_dao;
mod memory_lookup_dao;

pub use lookup_dao::LookupDao;
pub use memory_lookup_dao::MemoryLookupDao;

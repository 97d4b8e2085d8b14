pub mod tagged_cache;

pub use tagged_cache::InMemoryTaggedCache;

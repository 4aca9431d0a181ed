mod spec_store;

pub use spec_store::SpecStore;

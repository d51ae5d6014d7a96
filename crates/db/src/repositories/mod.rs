//! Repository layer: one unit struct per table, all methods take the pool.

pub mod todo_repo;

pub use todo_repo::TodoRepo;

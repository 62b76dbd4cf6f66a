//! Local persistence for ambient client state.

mod state_store;

pub use state_store::SqliteStateStore;

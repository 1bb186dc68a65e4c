//! Run CRUD, split read/write like the rest of the store.

mod read;
mod write;

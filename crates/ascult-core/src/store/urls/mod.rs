//! Link CRUD on `UrlDb`: read (lookup, list) and write (insert, metadata, soft delete).

mod read;
mod write;

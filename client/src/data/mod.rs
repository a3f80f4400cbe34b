//! Static catalog data compiled into the client.

pub mod catalog;

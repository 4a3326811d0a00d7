//! Storage layer for Bugar
//!
//! This crate provides the durable key-value boundary used to persist
//! device-level preferences across restarts.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;

pub use kv::{DeviceStore, KeyValueStore, KvConfig, KvError, KvStore, MemoryStore};

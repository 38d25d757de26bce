//! Hueshift Preference Storage
//!
//! This crate provides persistence for the theme preference: a single
//! selected-theme value stored per user. Stores are injected into the
//! coordinator as trait objects, so embedders can swap the file-backed store
//! for an in-process one (tests, environments without a home directory).

pub mod error;
pub mod preference;

pub use error::{StorageError, StorageResult};
pub use preference::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, ThemePreference};

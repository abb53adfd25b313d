//! Shared utility modules used across text-ripper components.

pub mod replacer;

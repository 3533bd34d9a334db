//! Language extractors producing member descriptions.

pub mod csharp;

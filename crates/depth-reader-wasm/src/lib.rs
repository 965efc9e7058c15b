//! Depth Reader WASM - WebAssembly bindings for depth-reader
//!
//! This crate exposes the depth-reader-core extraction and normalization
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `reader` - JPEG parsing and the `JsDepthReader` record wrapper
//! - `normalize` - In-place normalization of host-decoded depth pixels
//! - `schema` - The static display schema
//!
//! # Usage
//!
//! ```typescript
//! import init, { parse_depth_photo, record_schema } from '@depth-reader/wasm';
//!
//! await init();
//!
//! const reader = parse_depth_photo(new Uint8Array(await file.arrayBuffer()));
//! console.log(reader.format_variant, reader.record());
//! ```

use wasm_bindgen::prelude::*;

mod normalize;
mod reader;
mod schema;

pub use normalize::normalize_depth_pixels;
pub use reader::{extract_xmp_packets, parse_depth_photo, JsDepthReader, JsXmpPackets};
pub use schema::record_schema;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}

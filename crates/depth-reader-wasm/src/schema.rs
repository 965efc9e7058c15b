//! Display schema bindings.

use depth_reader_core::record_schema as core_record_schema;
use wasm_bindgen::prelude::*;

use crate::reader::to_js;

/// Every displayable record field as `{ path, label, kind, variant }`,
/// in display order. `variant` is `null` for fields shared by both schemas.
///
/// # Example (TypeScript)
/// ```typescript
/// const values = new Map(reader.field_values());
/// for (const field of record_schema()) {
///   if (values.has(field.path)) render(field.label, values.get(field.path));
/// }
/// ```
#[wasm_bindgen]
pub fn record_schema() -> Result<JsValue, JsValue> {
    to_js(core_record_schema())
}

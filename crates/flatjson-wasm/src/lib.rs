//! WASM bindings for flatjson-core.
//!
//! Exposes `loads` and `dumps` as `#[wasm_bindgen]` functions that can be
//! called from JavaScript/TypeScript. Values cross the boundary as JSON text so
//! the JS side can use `JSON.parse` / `JSON.stringify` on its end.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p flatjson-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/flatjson_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Parse flat JSON text and return the object as compact standard JSON.
///
/// Throws a JS error carrying the parse error message if the text is not a
/// valid flat JSON object.
#[wasm_bindgen]
pub fn loads(text: &str) -> std::result::Result<String, JsValue> {
    flatjson_core::to_json(text).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Serialize standard JSON text (the output of `JSON.stringify` on a plain
/// object) into canonical flat JSON.
///
/// Throws `Expected dictionary object` for non-objects and `Dictionary values
/// must be strings or numbers` for nested or boolean/null values.
#[wasm_bindgen]
pub fn dumps(json: &str) -> std::result::Result<String, JsValue> {
    flatjson_core::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the distance functions.
//!
//! JavaScript can hand us `null` or `undefined` where a string belongs, so the
//! arguments arrive as `Option<String>` and an absent one is rejected with the
//! `InvalidArgument` message instead of being measured as empty.

use crate::distance::{bounded_distance, distance, max_distance_from_signed};
use crate::error::LevError;
use wasm_bindgen::prelude::*;

fn require(name: &str, value: Option<String>) -> Result<String, LevError> {
    value.ok_or_else(|| LevError::invalid_argument(name, "value is null or undefined"))
}

fn to_js(err: LevError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Exact edit distance, counted in Unicode scalar values.
#[wasm_bindgen(js_name = distance)]
pub fn wasm_distance(reference: Option<String>, candidate: Option<String>) -> Result<usize, JsValue> {
    let reference = require("reference", reference).map_err(to_js)?;
    let candidate = require("candidate", candidate).map_err(to_js)?;
    Ok(distance(&reference, &candidate))
}

/// Bounded edit distance. A negative `max` disables the bound; past the
/// bound the result is `max + 1`.
#[wasm_bindgen(js_name = boundedDistance)]
pub fn wasm_bounded_distance(
    reference: Option<String>,
    candidate: Option<String>,
    max: i32,
) -> Result<usize, JsValue> {
    let reference = require("reference", reference).map_err(to_js)?;
    let candidate = require("candidate", candidate).map_err(to_js)?;
    let max = max_distance_from_signed(i64::from(max));
    Ok(bounded_distance(&reference, &candidate, max))
}

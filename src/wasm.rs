//! Expose the diff engine to WebAssembly.
use wasm_bindgen::prelude::*;

use crate::{
    AcceptanceState, DiffError, EditOperation, EditScript, Granularity, OperationId,
    OperationKind,
};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::compute_diff`. `granularity` is one of
/// `"word"`, `"character"` and `"line"`.
///
/// # Errors
///
/// If `granularity` is not recognised.
#[wasm_bindgen(js_name = computeDiff)]
pub fn compute_diff(
    old_content: &str,
    new_content: &str,
    granularity: &str,
) -> Result<Vec<JsEditOperation>, JsValue> {
    set_panic_hook();

    let granularity: Granularity = granularity.parse()?;
    let script = crate::compute_diff(old_content, new_content, granularity);

    Ok(Vec::from(script)
        .into_iter()
        .map(JsEditOperation::from)
        .collect())
}

/// WASM wrapper around `crate::apply_accepted`. Only the operations whose
/// position in `operations` is listed in `accepted_sequence_indices` are
/// applied.
///
/// # Errors
///
/// If an index is out of range or the operations don't fit `original`.
#[wasm_bindgen(js_name = applyAccepted)]
pub fn apply_accepted(
    original: &str,
    operations: Vec<JsEditOperation>,
    accepted_sequence_indices: Vec<u32>,
) -> Result<String, JsValue> {
    set_panic_hook();

    let script = EditScript::from_operations(
        operations
            .into_iter()
            .map(|operation| operation.inner)
            .collect(),
    );
    let acceptance: AcceptanceState = accepted_sequence_indices
        .into_iter()
        .map(|index| OperationId::new(index as usize))
        .collect();

    Ok(crate::apply_accepted(original, &script, &acceptance)?)
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

impl From<DiffError> for JsValue {
    fn from(error: DiffError) -> Self { JsValue::from_str(&error.to_string()) }
}

/// Wrapper type to expose `EditOperation` to JS.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsEditOperation {
    inner: EditOperation,
}

#[wasm_bindgen]
impl JsEditOperation {
    /// # Errors
    ///
    /// If `kind` is not one of `"insert"`, `"delete"` and `"replace"`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        kind: &str,
        start_pos: usize,
        end_pos: usize,
        old_text: String,
        new_text: String,
    ) -> Result<JsEditOperation, JsValue> {
        let kind: OperationKind = kind.parse()?;

        Ok(Self {
            inner: EditOperation::from_parts(kind, start_pos, end_pos, old_text, new_text),
        })
    }

    #[wasm_bindgen(getter, js_name = "type")]
    #[must_use]
    pub fn kind(&self) -> String { self.inner.kind().to_string() }

    #[wasm_bindgen(getter, js_name = startPos)]
    #[must_use]
    pub fn start_pos(&self) -> usize { self.inner.start_pos() }

    #[wasm_bindgen(getter, js_name = endPos)]
    #[must_use]
    pub fn end_pos(&self) -> usize { self.inner.end_pos() }

    #[wasm_bindgen(getter, js_name = oldText)]
    #[must_use]
    pub fn old_text(&self) -> String { self.inner.old_text().to_owned() }

    #[wasm_bindgen(getter, js_name = newText)]
    #[must_use]
    pub fn new_text(&self) -> String { self.inner.new_text().to_owned() }

    #[wasm_bindgen(getter, js_name = lineNumber)]
    #[must_use]
    pub fn line_number(&self) -> usize { self.inner.line_number() }

    #[wasm_bindgen(getter, js_name = tokenIndex)]
    #[must_use]
    pub fn token_index(&self) -> usize { self.inner.token_index() }

    #[wasm_bindgen(getter, js_name = sequenceIndex)]
    #[must_use]
    pub fn sequence_index(&self) -> usize { self.inner.sequence_index() }

    /// `change-<sequence index>`
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn id(&self) -> String { self.inner.id().to_string() }
}

impl From<EditOperation> for JsEditOperation {
    fn from(inner: EditOperation) -> Self { JsEditOperation { inner } }
}

impl From<JsEditOperation> for EditOperation {
    fn from(operation: JsEditOperation) -> Self { operation.inner }
}

//! Bindings to the MCDatepicker global.
//!
//! The library is loaded with a plain `<script>` tag, so it is reached through
//! `Reflect` on the global object rather than an `extern` block. A missing
//! script then shows up as `None` instead of a JS `ReferenceError`.

use contracts::shared::date_picker::PickerConfig;
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::binder::{Picker, PickerFactory};
use super::error::PickerError;

pub struct McDatepicker {
    name: String,
    factory: JsValue,
}

impl McDatepicker {
    /// Look up the factory object under `name` on `globalThis`.
    pub fn from_global(name: &str) -> Option<Self> {
        let factory = Reflect::get(&js_sys::global(), &JsValue::from_str(name)).ok()?;
        if factory.is_undefined() || factory.is_null() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            factory,
        })
    }
}

impl PickerFactory for McDatepicker {
    type Picker = McPicker;

    fn create(&self, config: &PickerConfig) -> Result<McPicker, PickerError> {
        let options = to_js_options(config)?;
        let create = method(&self.factory, "create", &self.name)?;
        let handle = create
            .call1(&self.factory, &options)
            .map_err(|err| PickerError::CreateFailed(describe(&err)))?;
        Ok(McPicker { handle })
    }
}

/// Instance returned by `MCDatepicker.create`.
pub struct McPicker {
    handle: JsValue,
}

impl Picker for McPicker {
    fn open(&self) -> Result<(), PickerError> {
        method(&self.handle, "open", "picker")?
            .call0(&self.handle)
            .map(|_| ())
            .map_err(|err| PickerError::OpenFailed(describe(&err)))
    }
}

/// Serialize the config and turn its date strings into `Date` objects.
///
/// An unparseable initial value becomes an invalid `Date` here, which is what
/// the widget would get from `new Date(value)` in a hand-written script.
fn to_js_options(config: &PickerConfig) -> Result<JsValue, PickerError> {
    let options = serde_wasm_bindgen::to_value(config)
        .map_err(|err| PickerError::InvalidConfig(err.to_string()))?;

    for key in PickerConfig::DATE_KEYS {
        let key = JsValue::from_str(key);
        let raw = Reflect::get(&options, &key)
            .map_err(|err| PickerError::InvalidConfig(describe(&err)))?;
        let date = js_sys::Date::new(&raw);
        Reflect::set(&options, &key, &date)
            .map_err(|err| PickerError::InvalidConfig(describe(&err)))?;
    }

    Ok(options)
}

fn method(target: &JsValue, name: &str, owner: &str) -> Result<Function, PickerError> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| PickerError::NotCallable(format!("{owner}.{name}")))
}

fn describe(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

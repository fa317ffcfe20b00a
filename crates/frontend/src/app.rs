use std::cell::Cell;

use contracts::shared::date_picker::{PickerOptions, SystemClock};
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event};

use crate::shared::date_picker::dom::InputField;
use crate::shared::date_picker::mc_datepicker::McDatepicker;
use crate::shared::date_picker::{bind, BindOutcome};

thread_local! {
    static BINDER_RAN: Cell<bool> = const { Cell::new(false) };
}

/// Run `f` the first time this is called on the page, skip it afterwards.
fn once_per_page<T>(f: impl FnOnce() -> T) -> Option<T> {
    if BINDER_RAN.with(|ran| ran.replace(true)) {
        return None;
    }
    Some(f())
}

/// Bind the transaction date picker. Returns `None` if it already ran.
pub fn boot() -> Option<BindOutcome> {
    once_per_page(|| {
        let options = PickerOptions::default();
        let field = InputField::find(&options.field_id);
        let factory = McDatepicker::from_global(&options.factory_global);

        let outcome = bind(field.as_ref(), factory.as_ref(), &SystemClock, &options);
        log::debug!("date picker: {outcome:?}");
        outcome
    })
}

/// Call `callback` once the document has been parsed.
///
/// When the script is loaded with `defer` or at the end of `<body>`,
/// `DOMContentLoaded` may already have fired, so the ready state is checked
/// first.
pub fn on_document_ready(callback: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() != "loading" {
        callback();
        return;
    }

    let listener = wasm_bindgen::closure::Closure::once_into_js(move |_: Event| callback());
    let options = AddEventListenerOptions::new();
    options.set_once(true);

    if let Err(err) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        listener.unchecked_ref(),
        &options,
    ) {
        log::error!("DOMContentLoaded listener not attached: {err:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once_per_page() {
        assert_eq!(once_per_page(|| 1), Some(1));
        assert_eq!(once_per_page(|| 2), None);
        assert_eq!(once_per_page(|| 3), None);
    }
}

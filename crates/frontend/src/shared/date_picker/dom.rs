use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use super::binder::DateField;

/// [`DateField`] over a real `<input>` element.
pub struct InputField {
    input: HtmlInputElement,
}

impl InputField {
    /// Look the field up by id. Returns `None` when there is no document, no
    /// such element, or the element is not an `<input>`.
    pub fn find(id: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let element = document.get_element_by_id(id)?;
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Self { input }),
            Err(_) => {
                log::debug!("date picker: #{id} is not an <input>");
                None
            }
        }
    }
}

impl DateField for InputField {
    fn value(&self) -> String {
        self.input.value()
    }

    fn set_type(&self, input_type: &str) {
        if let Err(err) = self.input.set_attribute("type", input_type) {
            log::warn!("date picker: could not set type={input_type}: {err:?}");
        }
    }

    fn on_click(&self, handler: Box<dyn Fn()>) {
        let closure = Closure::wrap(Box::new(move |_: Event| handler()) as Box<dyn FnMut(Event)>);

        if let Err(err) = self
            .input
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            log::warn!("date picker: click listener not attached: {err:?}");
            return;
        }

        // The field lives as long as the page does.
        closure.forget();
    }
}

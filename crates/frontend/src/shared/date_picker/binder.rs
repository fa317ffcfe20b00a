use std::rc::Rc;

use contracts::shared::date_picker::{Clock, InitialDate, PickerConfig, PickerOptions};

use super::error::PickerError;

/// Type the field is switched to before the widget takes over rendering.
pub const TEXT_INPUT_TYPE: &str = "text";

/// The form input the picker is attached to.
pub trait DateField {
    /// Current string value, possibly empty.
    fn value(&self) -> String;

    fn set_type(&self, input_type: &str);

    /// Run `handler` on every click, for the lifetime of the page.
    fn on_click(&self, handler: Box<dyn Fn()>);
}

/// Handle to a created widget instance.
pub trait Picker {
    fn open(&self) -> Result<(), PickerError>;
}

/// Entry point of the widget library.
pub trait PickerFactory {
    type Picker: Picker + 'static;

    fn create(&self, config: &PickerConfig) -> Result<Self::Picker, PickerError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    FieldMissing,
    FactoryMissing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindOutcome {
    Bound,
    /// Guard clause hit, nothing on the page was touched.
    Skipped(SkipReason),
    /// The widget refused the configuration. The field has already been
    /// switched to a text input but has no click handler.
    Failed(PickerError),
}

/// Attach the calendar widget to the date field.
///
/// A missing field or factory is a silent no-op. Otherwise the field becomes
/// a text input, the widget is created with "now" as the latest selectable
/// date, and every click on the field asks the widget to open.
pub fn bind<F, W>(
    field: Option<&F>,
    factory: Option<&W>,
    clock: &dyn Clock,
    options: &PickerOptions,
) -> BindOutcome
where
    F: DateField,
    W: PickerFactory,
{
    let Some(field) = field else {
        log::debug!("date picker: #{} not found, skipping", options.field_id);
        return BindOutcome::Skipped(SkipReason::FieldMissing);
    };
    let Some(factory) = factory else {
        log::debug!(
            "date picker: {} not loaded, skipping",
            options.factory_global
        );
        return BindOutcome::Skipped(SkipReason::FactoryMissing);
    };

    // Native date inputs render their own control, which fights the widget.
    field.set_type(TEXT_INPUT_TYPE);

    let now = clock.now();
    let initial = InitialDate::resolve(&field.value(), now);
    if let InitialDate::Unparseable(raw) = &initial {
        log::debug!("date picker: passing unparseable value {raw:?} through");
    }
    let config = options.build_config(initial, now);

    let picker = match factory.create(&config) {
        Ok(picker) => Rc::new(picker),
        Err(err) => {
            log::error!("date picker: {err}");
            return BindOutcome::Failed(err);
        }
    };

    field.on_click(Box::new(move || {
        if let Err(err) = picker.open() {
            log::warn!("date picker: {err}");
        }
    }));

    BindOutcome::Bound
}

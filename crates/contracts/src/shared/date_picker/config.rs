use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::initial_date::{format_instant, InitialDate};

/// Django renders the `transaction_date` form field with this id.
pub const DEFAULT_FIELD_ID: &str = "id_transaction_date";
pub const DEFAULT_DATE_FORMAT: &str = "yyyy-mm-dd";
pub const DEFAULT_OK_LABEL: &str = "OK";
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";
/// Name of the widget library's global object.
pub const DEFAULT_FACTORY_GLOBAL: &str = "MCDatepicker";

/// Settings for the transaction form's picker binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    pub field_id: String,
    pub date_format: String,
    pub close_on_blur: bool,
    pub ok_label: String,
    pub cancel_label: String,
    pub factory_global: String,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            field_id: DEFAULT_FIELD_ID.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            close_on_blur: true,
            ok_label: DEFAULT_OK_LABEL.to_string(),
            cancel_label: DEFAULT_CANCEL_LABEL.to_string(),
            factory_global: DEFAULT_FACTORY_GLOBAL.to_string(),
        }
    }
}

impl PickerOptions {
    /// CSS selector the widget uses to find the field.
    pub fn selector(&self) -> String {
        format!("#{}", self.field_id)
    }

    /// Build the object passed to `MCDatepicker.create`.
    ///
    /// `now` becomes the upper bound no matter what `selected_date` holds.
    pub fn build_config(&self, selected_date: InitialDate, now: DateTime<Utc>) -> PickerConfig {
        PickerConfig {
            el: self.selector(),
            date_format: self.date_format.clone(),
            selected_date,
            max_date: now,
            close_on_blur: self.close_on_blur,
            custom_ok_btn: self.ok_label.clone(),
            custom_cancel_btn: self.cancel_label.clone(),
        }
    }
}

/// Creation options in the widget's own key names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerConfig {
    pub el: String,
    pub date_format: String,
    pub selected_date: InitialDate,
    #[serde(serialize_with = "serialize_instant")]
    pub max_date: DateTime<Utc>,
    pub close_on_blur: bool,
    #[serde(rename = "customOkBTN")]
    pub custom_ok_btn: String,
    #[serde(rename = "customCancelBTN")]
    pub custom_cancel_btn: String,
}

impl PickerConfig {
    /// Keys whose string values must become JS `Date` objects before the call.
    pub const DATE_KEYS: [&'static str; 2] = ["selectedDate", "maxDate"];
}

fn serialize_instant<S: Serializer>(
    instant: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_instant(instant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_default_options() {
        let options = PickerOptions::default();
        assert_eq!(options.selector(), "#id_transaction_date");
        assert_eq!(options.date_format, "yyyy-mm-dd");
        assert!(options.close_on_blur);
        assert_eq!(options.factory_global, "MCDatepicker");
    }

    #[test]
    fn test_serialized_keys() {
        let config = PickerOptions::default().build_config(InitialDate::Today(now()), now());
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(
            value,
            json!({
                "el": "#id_transaction_date",
                "dateFormat": "yyyy-mm-dd",
                "selectedDate": "2024-01-15T09:30:00.000Z",
                "maxDate": "2024-01-15T09:30:00.000Z",
                "closeOnBlur": true,
                "customOkBTN": "OK",
                "customCancelBTN": "Cancel",
            })
        );
        for key in PickerConfig::DATE_KEYS {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_max_date_ignores_selected_date() {
        let future = InitialDate::resolve("2099-12-31", now());
        let config = PickerOptions::default().build_config(future, now());

        assert_eq!(config.max_date, now());
        assert!(config.selected_date.instant().unwrap() > config.max_date);
    }

    #[test]
    fn test_unparseable_selected_date_serializes_raw() {
        let config = PickerOptions::default()
            .build_config(InitialDate::Unparseable("not a date".to_string()), now());
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["selectedDate"], json!("not a date"));
    }
}

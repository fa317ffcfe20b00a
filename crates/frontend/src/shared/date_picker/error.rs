use thiserror::Error;

/// Failures reported by the widget library.
///
/// None of these reach the page: the binder logs them and leaves the field as
/// a plain text input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("picker options could not be converted: {0}")]
    InvalidConfig(String),
    #[error("`{0}` is not callable")]
    NotCallable(String),
    #[error("picker creation failed: {0}")]
    CreateFailed(String),
    #[error("picker could not be opened: {0}")]
    OpenFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_js_detail() {
        let cases = [
            (
                PickerError::InvalidConfig("bad key".to_string()),
                "picker options could not be converted: bad key",
            ),
            (
                PickerError::NotCallable("MCDatepicker.create".to_string()),
                "`MCDatepicker.create` is not callable",
            ),
            (
                PickerError::CreateFailed("no element".to_string()),
                "picker creation failed: no element",
            ),
            (
                PickerError::OpenFailed("detached".to_string()),
                "picker could not be opened: detached",
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }
}

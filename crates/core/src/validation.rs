//! Bridges `validator` derive output into [`CoreError`].

use validator::{Validate, ValidationErrors};

use crate::error::{CoreError, FieldError};

/// Run the derived validators on `value`, mapping failures to
/// [`CoreError::InvalidFields`].
pub fn validate_request<T: Validate>(value: &T) -> Result<(), CoreError> {
    value
        .validate()
        .map_err(|errors| CoreError::InvalidFields(field_errors(&errors)))
}

/// Flatten `validator` errors into wire-named field errors, sorted by field.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = to_camel_case(&field.to_string());
            errs.iter().map(move |err| FieldError {
                field: field.clone(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string()),
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

/// `device_name` -> `deviceName`. Already camel-cased input passes through.
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "Name is required"))]
        display_name: String,
        #[validate(range(min = 1, message = "Must be positive"))]
        count: i64,
    }

    #[test]
    fn valid_value_passes() {
        let probe = Probe {
            display_name: "x".into(),
            count: 1,
        };
        assert!(validate_request(&probe).is_ok());
    }

    #[test]
    fn errors_are_camel_cased_and_sorted() {
        let probe = Probe {
            display_name: String::new(),
            count: 0,
        };
        let err = validate_request(&probe).unwrap_err();
        assert_matches!(err, CoreError::InvalidFields(fields) => {
            assert_eq!(
                fields,
                vec![
                    FieldError { field: "count".into(), message: "Must be positive".into() },
                    FieldError { field: "displayName".into(), message: "Name is required".into() },
                ]
            );
        });
    }

    #[test]
    fn camel_case_conversion() {
        assert_eq!(to_camel_case("device_name"), "deviceName");
        assert_eq!(to_camel_case("deviceId"), "deviceId");
        assert_eq!(to_camel_case("status"), "status");
    }
}

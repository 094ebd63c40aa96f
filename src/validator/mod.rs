// Copyright 2024 Contributors to the vault-gpg-transit project.
// SPDX-License-Identifier: Apache-2.0
//! Key creation parameter validation
//!
//! Parameters are checked against the capabilities of the engine before any
//! request is built. Checks run in a fixed order and the first failing one
//! decides the error; nothing is accumulated. Each check hands the value it
//! parsed to the next, so a request is read only once. Validation only reads
//! its input and the constant tables below.
use crate::operations::{KeyCreationRequest, KeyOptions, KeyType, Setting, ValidatedRequest};
use crate::requests::{ResponseStatus, Result};

/// Parameters that only make sense for the transit engine.
///
/// Their presence is refused whatever the value, including `false` and `null`.
pub const UNSUPPORTED_PARAMS: [&str; 3] =
    ["convergent_encryption", "derived", "allow_plaintext_backup"];

/// Validate a key creation request and normalize its optional fields.
///
/// # Errors
/// - `UnsupportedParam` if any parameter of `UNSUPPORTED_PARAMS` was supplied
/// - `MissingRequiredParam` if `name` (absent or empty) or `key_type` is missing
/// - `InvalidParamValue` if `key_type` is not one of `ALLOWED_KEY_TYPES`, or if
/// `name` can not be used as a key name by the engine
pub fn validate(request: &KeyCreationRequest) -> Result<ValidatedRequest> {
    let options = &request.options;

    check_unsupported_params(options)?;
    let (name, token) = required_params(request)?;
    let key_type = allowed_key_type(token)?;
    check_name_format(name)?;

    Ok(ValidatedRequest {
        name: name.to_owned(),
        key_type,
        exportable: Setting::from(options.exportable),
        real_name: Setting::from(options.real_name.clone()),
        email: Setting::from(options.email.clone()),
    })
}

fn check_unsupported_params(options: &KeyOptions) -> Result<()> {
    match options
        .supplied_params()
        .find(|param| UNSUPPORTED_PARAMS.contains(param))
    {
        Some(param) => Err(ResponseStatus::UnsupportedParam {
            param: param.to_owned(),
        }),
        None => Ok(()),
    }
}

// `name` is checked before `key_type`; an empty name counts as missing.
fn required_params(request: &KeyCreationRequest) -> Result<(&str, &str)> {
    let name = match request.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(missing("name")),
    };
    let token = request
        .options
        .key_type
        .as_deref()
        .ok_or_else(|| missing("key_type"))?;

    Ok((name, token))
}

fn allowed_key_type(token: &str) -> Result<KeyType> {
    KeyType::from_token(token).ok_or_else(|| ResponseStatus::InvalidParamValue {
        param: String::from("key_type"),
        value: token.to_owned(),
        allowed: KeyType::allowed_tokens(),
    })
}

fn check_name_format(name: &str) -> Result<()> {
    if is_valid_key_name(name) {
        Ok(())
    } else {
        Err(ResponseStatus::InvalidParamValue {
            param: String::from("name"),
            value: name.to_owned(),
            allowed: Vec::new(),
        })
    }
}

fn missing(param: &str) -> ResponseStatus {
    ResponseStatus::MissingRequiredParam {
        param: param.to_owned(),
    }
}

// Names end up as a path segment of the engine API, which only routes
// `\w(([\w-.]+)?\w)?`.
fn is_valid_key_name(name: &str) -> bool {
    fn is_word(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    match (name.chars().next(), name.chars().last()) {
        (Some(first), Some(last)) if is_word(first) && is_word(last) => name
            .chars()
            .all(|c| is_word(c) || c == '-' || c == '.'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{validate, UNSUPPORTED_PARAMS};
    use crate::operations::{KeyCreationRequest, KeyOptions, KeyType, Setting};
    use crate::requests::ResponseStatus;
    use serde_json::json;

    fn valid_options() -> KeyOptions {
        KeyOptions::new().with_key_type("rsa-2048")
    }

    #[test]
    fn unsupported_params_rejected_whatever_the_value() {
        for param in UNSUPPORTED_PARAMS.iter() {
            for value in [true, false].iter() {
                let request = KeyCreationRequest::new(
                    "test-key",
                    valid_options().with_param(*param, json!(*value)),
                );

                assert_eq!(
                    validate(&request).unwrap_err(),
                    ResponseStatus::UnsupportedParam {
                        param: param.to_string()
                    }
                );
            }
        }
    }

    #[test]
    fn unsupported_params_from_json_rejected_whatever_the_value() {
        for value in [json!(null), json!("yes"), json!(1), json!({})].iter() {
            let request: KeyCreationRequest = serde_json::from_value(json!({
                "name": "test-key",
                "key_type": "rsa-2048",
                "derived": value,
            }))
            .unwrap();

            assert_eq!(
                validate(&request).unwrap_err(),
                ResponseStatus::UnsupportedParam {
                    param: String::from("derived")
                }
            );
        }
    }

    #[test]
    fn mistyped_unsupported_param_reported_before_missing_fields() {
        let request: KeyCreationRequest =
            serde_json::from_value(json!({ "convergent_encryption": "yes" })).unwrap();

        assert_eq!(
            validate(&request).unwrap_err(),
            ResponseStatus::UnsupportedParam {
                param: String::from("convergent_encryption")
            }
        );
    }

    #[test]
    fn unsupported_param_checked_before_required_fields() {
        let request = KeyCreationRequest {
            name: None,
            options: KeyOptions::new().with_param("allow_plaintext_backup", json!(false)),
        };

        assert_eq!(
            validate(&request).unwrap_err(),
            ResponseStatus::UnsupportedParam {
                param: String::from("allow_plaintext_backup")
            }
        );
    }

    #[test]
    fn missing_key_type() {
        let options = KeyOptions::new()
            .with_exportable(true)
            .with_real_name("John Doe")
            .with_email("john.doe@example.com");

        assert_eq!(
            validate(&KeyCreationRequest::new("test-key", options)).unwrap_err(),
            ResponseStatus::MissingRequiredParam {
                param: String::from("key_type")
            }
        );
    }

    #[test]
    fn missing_or_empty_name() {
        let missing = KeyCreationRequest {
            name: None,
            options: valid_options(),
        };
        let empty = KeyCreationRequest::new("", valid_options());
        let expected = ResponseStatus::MissingRequiredParam {
            param: String::from("name"),
        };

        assert_eq!(validate(&missing).unwrap_err(), expected);
        assert_eq!(validate(&empty).unwrap_err(), expected);
    }

    #[test]
    fn name_checked_before_key_type() {
        let request = KeyCreationRequest::default();

        assert_eq!(validate(&request).unwrap_err().param(), Some("name"));
    }

    #[test]
    fn unknown_key_type() {
        let options = KeyOptions::new().with_key_type("rsa-1024");

        match validate(&KeyCreationRequest::new("test-key", options)).unwrap_err() {
            ResponseStatus::InvalidParamValue {
                param,
                value,
                allowed,
            } => {
                assert_eq!(param, "key_type");
                assert_eq!(value, "rsa-1024");
                assert_eq!(allowed, KeyType::allowed_tokens());
            }
            status => panic!("unexpected status {:?}", status),
        }
    }

    #[test]
    fn invalid_names() {
        for name in ["-key", "key.", "my key", "keys/evil", "a..b/c", "clé"].iter() {
            let status = validate(&KeyCreationRequest::new(*name, valid_options())).unwrap_err();
            assert_eq!(
                status,
                ResponseStatus::InvalidParamValue {
                    param: String::from("name"),
                    value: name.to_string(),
                    allowed: Vec::new(),
                }
            );
        }
    }

    #[test]
    fn valid_names() {
        for name in ["k", "test-key", "team_a.signing-2", "A1"].iter() {
            let _ = validate(&KeyCreationRequest::new(*name, valid_options())).unwrap();
        }
    }

    #[test]
    fn unset_optionals_use_engine_default() {
        let validated = validate(&KeyCreationRequest::new("test-key", valid_options())).unwrap();

        assert_eq!(validated.name, "test-key");
        assert_eq!(validated.key_type, KeyType::Rsa2048);
        assert_eq!(validated.exportable, Setting::EngineDefault);
        assert_eq!(validated.real_name, Setting::EngineDefault);
        assert_eq!(validated.email, Setting::EngineDefault);
    }

    #[test]
    fn explicit_optionals_are_kept() {
        let options = KeyOptions::new()
            .with_key_type("rsa-4096")
            .with_exportable(false)
            .with_real_name("")
            .with_email("not an address");
        let validated = validate(&KeyCreationRequest::new("test-key", options)).unwrap();

        assert_eq!(validated.key_type, KeyType::Rsa4096);
        assert_eq!(validated.exportable, Setting::Explicit(false));
        assert_eq!(validated.real_name, Setting::Explicit(String::new()));
        assert_eq!(
            validated.email,
            Setting::Explicit(String::from("not an address"))
        );
    }

    #[test]
    fn unknown_params_are_accepted() {
        let options = valid_options().with_param("comment", json!("ignored"));

        let _ = validate(&KeyCreationRequest::new("test-key", options)).unwrap();
    }

    #[test]
    fn validation_is_repeatable() {
        let accepted = KeyCreationRequest::new("test-key", valid_options().with_exportable(true));
        let rejected = KeyCreationRequest::new("test-key", KeyOptions::new().with_key_type("dsa"));

        assert_eq!(validate(&accepted), validate(&accepted));
        assert_eq!(validate(&rejected), validate(&rejected));
    }
}

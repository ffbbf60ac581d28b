use crate::{Credential, GUEST_PROVIDER};

use googletest::prelude::*;

#[test]
fn given_device_id_provider_when_is_guest_then_true() {
    let credential = Credential {
        provider: GUEST_PROVIDER.to_string(),
        ..Credential::default()
    };

    assert_that!(credential.is_guest(), eq(true));
}

#[test]
fn given_registered_provider_when_is_guest_then_false() {
    for provider in ["google", "apple", "facebook", "email", ""] {
        let credential = Credential {
            provider: provider.to_string(),
            ..Credential::default()
        };

        assert!(!credential.is_guest(), "{provider} must not be a guest provider");
    }
}

#[test]
fn given_camel_case_json_when_deserialize_then_display_text_is_read() {
    let json = r#"{"id":"c1","provider":"google","displayText":"alice@example.com"}"#;

    let credential: Credential = serde_json::from_str(json).unwrap();

    assert_that!(credential.display_text.as_str(), eq("alice@example.com"));
}

// Shared test fixture for ChangeRequest.
// The canonical request is read from json/change_request.json; setters override single fields.

use crate::modules::customer_records::core::change_request::ChangeRequest;
use std::fs;

#[derive(Clone)]
pub struct ChangeRequestBuilder {
    inner: ChangeRequest,
}

impl Default for ChangeRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ChangeRequestBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/requests/json/change_request.json").unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn timestamp(mut self, v: impl Into<String>) -> Self {
        self.inner.timestamp = v.into();
        self
    }

    pub fn operation(mut self, v: impl Into<String>) -> Self {
        self.inner.operation = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = Some(v.into());
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = Some(v.into());
        self
    }

    pub fn address(mut self, v: impl Into<String>) -> Self {
        self.inner.address = Some(v.into());
        self
    }

    pub fn phone(mut self, v: impl Into<String>) -> Self {
        self.inner.phone = Some(v.into());
        self
    }

    pub fn build(self) -> ChangeRequest {
        self.inner
    }
}

#[cfg(test)]
mod change_request_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ChangeRequestBuilder::default().build();
        assert_eq!(built.id, "cust-fixed-0001");
        assert_eq!(built.timestamp, "2024-05-01T10:00:00.000000");
        assert_eq!(built.operation, "INSERT");
        assert_eq!(built.email.as_deref(), Some("alice@example.com"));
        assert_eq!(built.address.as_deref(), Some("1 Main St, Springfield"));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = ChangeRequestBuilder::new()
            .id("cust-123")
            .timestamp("t-456")
            .operation("DELETE")
            .name("Bob")
            .email("bob@example.com")
            .address("2 Side St")
            .phone("555-0199")
            .build();

        assert_eq!(custom.id, "cust-123");
        assert_eq!(custom.timestamp, "t-456");
        assert_eq!(custom.operation, "DELETE");
        assert_eq!(custom.name.as_deref(), Some("Bob"));
        assert_eq!(custom.email.as_deref(), Some("bob@example.com"));
        assert_eq!(custom.address.as_deref(), Some("2 Side St"));
        assert_eq!(custom.phone.as_deref(), Some("555-0199"));
    }
}

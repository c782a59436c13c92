//! Shared call path: client creation, invocation and envelope status check

use crate::config::ReserveConfig;
use crate::enums::ResultStatus;
use crate::error::ReserveError;
use mvtk_soap::{SoapClient, SoapError, XmlElement};
use serde::{Deserialize, Serialize};

/// Result envelope present on every backend response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultInfo {
    /// Status code
    pub status: String,
    /// Backend message
    pub message: String,
}

impl ResultInfo {
    /// Whether the status is [`ResultStatus::Success`]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == ResultStatus::Success.as_str()
    }

    /// Read `RESULT_INFO` from an operation result element
    pub(crate) fn decode(result: &XmlElement) -> Result<Self, SoapError> {
        let info = result.require("RESULT_INFO")?;
        Ok(Self {
            status: info.child_text("STATUS")?.to_string(),
            message: optional_text(info, "MESSAGE"),
        })
    }

    /// Fail with `ReserveError::BackendStatus` unless the status is success
    pub(crate) fn ensure_success(&self) -> Result<(), ReserveError> {
        if self.is_success() {
            return Ok(());
        }
        tracing::warn!(status = %self.status, message = %self.message, "Backend returned failure status");
        Err(ReserveError::BackendStatus {
            status: self.status.clone(),
            message: self.message.clone(),
        })
    }
}

/// Create a client for `service_path`, invoke `operation` and return its
/// `<operation>Result` element with a successful envelope
pub(crate) async fn invoke(
    config: &ReserveConfig,
    service_path: &str,
    operation: &str,
    parameters: Vec<XmlElement>,
) -> Result<(XmlElement, ResultInfo), ReserveError> {
    let client = SoapClient::create(&config.wsdl_url(service_path), config.options()).await?;
    let response = client.call(operation, parameters).await?;

    let result_name = format!("{operation}Result");
    let result = response
        .children
        .into_iter()
        .find(|c| c.local_name() == result_name)
        .ok_or_else(|| SoapError::MissingElement {
            parent: format!("{operation}Response"),
            name: result_name,
        })?;

    let info = ResultInfo::decode(&result)?;
    info.ensure_success()?;
    Ok((result, info))
}

/// Text of a child, empty when absent
pub(crate) fn optional_text(element: &XmlElement, local: &str) -> String {
    element
        .child(local)
        .map(|c| c.text.clone())
        .unwrap_or_default()
}

/// Required child parsed as a count
pub(crate) fn count(element: &XmlElement, local: &str) -> Result<u32, SoapError> {
    let text = element.child_text(local)?;
    text.trim().parse().map_err(|_| SoapError::InvalidValue {
        name: local.to_string(),
        value: text.to_string(),
    })
}

/// Items of an array wrapper; absent or `xsi:nil` wrappers yield no items
pub(crate) fn list<T>(
    element: &XmlElement,
    local: &str,
    decode: impl Fn(&XmlElement) -> Result<T, SoapError>,
) -> Result<Vec<T>, SoapError> {
    match element.child(local) {
        Some(wrapper) if !wrapper.is_nil() => wrapper.children.iter().map(decode).collect(),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn result(xml: &str) -> XmlElement {
        XmlElement::parse(xml).unwrap()
    }

    #[test]
    fn test_decode_result_info() {
        let element = result(
            "<R xmlns:a=\"urn:a\"><a:RESULT_INFO><a:MESSAGE/><a:STATUS>N000</a:STATUS></a:RESULT_INFO></R>",
        );
        let info = ResultInfo::decode(&element).unwrap();

        assert_eq!(info.status, "N000");
        assert_eq!(info.message, "");
        assert!(info.is_success());
        assert!(info.ensure_success().is_ok());
    }

    #[test]
    fn test_failure_status_is_backend_error() {
        let info = ResultInfo {
            status: "E000".to_string(),
            message: "System error".to_string(),
        };

        match info.ensure_success() {
            Err(ReserveError::BackendStatus { status, message }) => {
                assert_eq!(status, "E000");
                assert_eq!(message, "System error");
            }
            other => unreachable!("expected backend status error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_result_info() {
        assert!(matches!(
            ResultInfo::decode(&result("<R/>")),
            Err(SoapError::MissingElement { .. })
        ));
    }

    #[test]
    fn test_count_rejects_non_numeric() {
        let element = result("<R><N>x</N><M> 3 </M></R>");
        assert!(matches!(count(&element, "N"), Err(SoapError::InvalidValue { .. })));
        assert_eq!(count(&element, "M").unwrap(), 3);
    }

    #[test]
    fn test_list_handles_nil_and_absent() {
        let element = result(
            "<R xmlns:i=\"http://www.w3.org/2001/XMLSchema-instance\"><L i:nil=\"true\"/><K><I>a</I><I>b</I></K></R>",
        );
        let text = |e: &XmlElement| Ok(e.text.clone());

        assert!(list(&element, "L", text).unwrap().is_empty());
        assert!(list(&element, "Missing", text).unwrap().is_empty());
        assert_eq!(list(&element, "K", text).unwrap(), vec!["a", "b"]);
    }
}

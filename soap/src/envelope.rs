//! SOAP 1.1 envelope encoding and decoding

use crate::error::SoapError;
use crate::xml::{XSI_NAMESPACE, XmlElement};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, Event};

/// SOAP 1.1 envelope namespace
pub const SOAP_ENV_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Wrap `payload` in a SOAP envelope and serialize it with an XML declaration
///
/// # Errors
///
/// Returns `SoapError::Xml` if writing fails
pub fn encode_envelope(payload: XmlElement) -> Result<String, SoapError> {
    let envelope = XmlElement::new("soap:Envelope")
        .with_attribute("xmlns:soap", SOAP_ENV_NAMESPACE)
        .with_attribute("xmlns:xsi", XSI_NAMESPACE)
        .with_child(XmlElement::new("soap:Body").with_child(payload));

    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    envelope.write_to(&mut writer)?;
    String::from_utf8(writer.into_inner()).map_err(|e| SoapError::Xml(e.to_string()))
}

/// Parse a SOAP response and return the first element inside `Body`
///
/// # Errors
///
/// - `SoapError::Fault` if the body carries a SOAP fault
/// - `SoapError::MissingElement` if the envelope or body is absent
/// - `SoapError::Xml` if the document is not well-formed
pub fn decode_envelope(xml: &str) -> Result<XmlElement, SoapError> {
    let root = XmlElement::parse(xml)?;
    if root.local_name() != "Envelope" {
        return Err(SoapError::MissingElement {
            parent: "document".to_string(),
            name: "Envelope".to_string(),
        });
    }

    let body = root
        .children
        .into_iter()
        .find(|c| c.local_name() == "Body")
        .ok_or_else(|| SoapError::MissingElement {
            parent: "Envelope".to_string(),
            name: "Body".to_string(),
        })?;

    let payload = body
        .children
        .into_iter()
        .next()
        .ok_or_else(|| SoapError::MissingElement {
            parent: "Body".to_string(),
            name: "payload".to_string(),
        })?;

    if payload.local_name() == "Fault" {
        return Err(fault_from(&payload));
    }
    Ok(payload)
}

/// Read a SOAP 1.1 (`faultcode`/`faultstring`) or 1.2 (`Code`/`Reason`) fault
fn fault_from(fault: &XmlElement) -> SoapError {
    let code = fault
        .child("faultcode")
        .map(|c| c.text.clone())
        .or_else(|| {
            fault
                .child("Code")
                .and_then(|c| c.child("Value"))
                .map(|v| v.text.clone())
        })
        .unwrap_or_default();

    let reason = fault
        .child("faultstring")
        .map(|c| c.text.clone())
        .or_else(|| {
            fault
                .child("Reason")
                .and_then(|r| r.child("Text"))
                .map(|t| t.text.clone())
        })
        .unwrap_or_default();

    SoapError::Fault { code, reason }
}

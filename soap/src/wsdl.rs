//! WSDL service descriptions
//!
//! Only the parts needed to invoke document/literal operations are read:
//! the target namespace, the SOAP address of the first port, and the
//! `soapAction` of each bound operation.

use crate::error::SoapError;
use crate::xml::XmlElement;
use std::collections::HashMap;

/// Parsed service description
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceDescription {
    target_namespace: String,
    address: String,
    actions: HashMap<String, String>,
}

impl ServiceDescription {
    /// Parse a WSDL 1.1 document
    ///
    /// # Errors
    ///
    /// - `SoapError::Xml` if the document is not well-formed
    /// - `SoapError::Wsdl` if the root is not `definitions`, or no SOAP
    ///   address or target namespace is declared
    pub fn parse(wsdl: &str) -> Result<Self, SoapError> {
        let root = XmlElement::parse(wsdl)?;
        if root.local_name() != "definitions" {
            return Err(SoapError::Wsdl(format!(
                "expected <definitions> root, found <{}>",
                root.name
            )));
        }

        let target_namespace = root
            .attr("targetNamespace")
            .ok_or_else(|| SoapError::Wsdl("missing targetNamespace".to_string()))?
            .to_string();

        let address = root
            .children_named("service")
            .flat_map(|service| service.children_named("port"))
            .filter_map(|port| port.child("address"))
            .find_map(|address| address.attr("location"))
            .ok_or_else(|| SoapError::Wsdl("no SOAP address declared".to_string()))?
            .to_string();

        let actions = root
            .children_named("binding")
            .flat_map(|binding| binding.children_named("operation"))
            .filter_map(|operation| {
                let name = operation.attr("name")?;
                let action = operation
                    .child("operation")
                    .and_then(|soap_op| soap_op.attr("soapAction"))
                    .unwrap_or_default();
                Some((name.to_string(), action.to_string()))
            })
            .collect();

        Ok(Self {
            target_namespace,
            address,
            actions,
        })
    }

    /// Namespace of the operation elements
    #[must_use]
    pub fn target_namespace(&self) -> &str {
        &self.target_namespace
    }

    /// Endpoint the operations are posted to
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// `soapAction` for a bound operation
    #[must_use]
    pub fn soap_action(&self, operation: &str) -> Option<&str> {
        self.actions.get(operation).map(String::as_str)
    }

    /// Names of all bound operations
    pub fn operations(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const WSDL: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<wsdl:definitions name="SeatInfoSyncSvc" targetNamespace="http://tempuri.org/"
    xmlns:wsdl="http://schemas.xmlsoap.org/wsdl/"
    xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/"
    xmlns:tns="http://tempuri.org/">
  <wsdl:portType name="ISeatInfoSyncSvc">
    <wsdl:operation name="SeatInfoSync"/>
  </wsdl:portType>
  <wsdl:binding name="BasicHttpBinding_ISeatInfoSyncSvc" type="tns:ISeatInfoSyncSvc">
    <soap:binding transport="http://schemas.xmlsoap.org/soap/http"/>
    <wsdl:operation name="SeatInfoSync">
      <soap:operation soapAction="http://tempuri.org/ISeatInfoSyncSvc/SeatInfoSync" style="document"/>
      <wsdl:input><soap:body use="literal"/></wsdl:input>
    </wsdl:operation>
  </wsdl:binding>
  <wsdl:service name="SeatInfoSyncSvc">
    <wsdl:port name="BasicHttpBinding_ISeatInfoSyncSvc" binding="tns:BasicHttpBinding_ISeatInfoSyncSvc">
      <soap:address location="https://example.test/Seat/SeatInfoSyncSvc.svc"/>
    </wsdl:port>
  </wsdl:service>
</wsdl:definitions>"#;

    #[test]
    fn test_parse_wcf_single_wsdl() {
        let description = ServiceDescription::parse(WSDL).unwrap();

        assert_eq!(description.target_namespace(), "http://tempuri.org/");
        assert_eq!(
            description.address(),
            "https://example.test/Seat/SeatInfoSyncSvc.svc"
        );
        assert_eq!(
            description.soap_action("SeatInfoSync"),
            Some("http://tempuri.org/ISeatInfoSyncSvc/SeatInfoSync")
        );
        assert_eq!(description.soap_action("PurchaseNumberAuth"), None);
        assert_eq!(description.operations().collect::<Vec<_>>(), vec!["SeatInfoSync"]);
    }

    #[test]
    fn test_parse_rejects_non_wsdl_root() {
        assert!(matches!(
            ServiceDescription::parse("<html/>"),
            Err(SoapError::Wsdl(_))
        ));
    }

    #[test]
    fn test_parse_requires_address() {
        let wsdl = r#"<definitions targetNamespace="http://tempuri.org/"><service name="S"/></definitions>"#;
        match ServiceDescription::parse(wsdl) {
            Err(SoapError::Wsdl(message)) => assert!(message.contains("address")),
            other => unreachable!("expected WSDL error, got {other:?}"),
        }
    }
}

//! Mock reserve backend shared by the integration tests.

#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Service description for `service` (e.g. `PurchaseNumberAuthSvc`) served at `svc_path`
pub fn wsdl(server: &MockServer, service: &str, operation: &str, svc_path: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<wsdl:definitions name="{service}" targetNamespace="http://tempuri.org/"
    xmlns:wsdl="http://schemas.xmlsoap.org/wsdl/"
    xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/"
    xmlns:tns="http://tempuri.org/">
  <wsdl:binding name="BasicHttpBinding_I{service}" type="tns:I{service}">
    <soap:binding transport="http://schemas.xmlsoap.org/soap/http"/>
    <wsdl:operation name="{operation}">
      <soap:operation soapAction="http://tempuri.org/I{service}/{operation}" style="document"/>
    </wsdl:operation>
  </wsdl:binding>
  <wsdl:service name="{service}">
    <wsdl:port name="BasicHttpBinding_I{service}" binding="tns:BasicHttpBinding_I{service}">
      <soap:address location="{uri}{svc_path}"/>
    </wsdl:port>
  </wsdl:service>
</wsdl:definitions>"#,
        uri = server.uri()
    )
}

/// Serve the service description on GET `svc_path`
pub async fn mount_wsdl(server: &MockServer, service: &str, operation: &str, svc_path: &str) {
    Mock::given(method("GET"))
        .and(path(svc_path))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(wsdl(server, service, operation, svc_path)),
        )
        .mount(server)
        .await;
}

/// SOAP envelope around an operation response body
pub fn envelope(operation: &str, model_namespace: &str, result_body: &str) -> String {
    format!(
        r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body>
<{operation}Response xmlns="http://tempuri.org/">
<{operation}Result xmlns:a="{model_namespace}" xmlns:i="http://www.w3.org/2001/XMLSchema-instance">
{result_body}
</{operation}Result>
</{operation}Response>
</s:Body></s:Envelope>"#
    )
}

/// `RESULT_INFO` element
pub fn result_info(status: &str, message: &str) -> String {
    format!("<a:RESULT_INFO><a:MESSAGE>{message}</a:MESSAGE><a:STATUS>{status}</a:STATUS></a:RESULT_INFO>")
}

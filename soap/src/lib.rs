//! # MVTK SOAP
//!
//! Minimal SOAP 1.1 client used by the reserve service bindings.
//!
//! ## Example
//!
//! ```no_run
//! use mvtk_soap::{ClientOptions, SoapClient, XmlElement};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Fetch the service description and bind a client to it
//!     let client = SoapClient::create(
//!         "https://example.test/Svc.svc?singleWsdl",
//!         &ClientOptions::default(),
//!     )
//!     .await?;
//!
//!     // Invoke an operation; parameters are qualified with `tns`
//!     let response = client
//!         .call("Ping", vec![XmlElement::text_element("tns:value", "1")])
//!         .await?;
//!
//!     println!("Response: {:?}", response);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - WSDL parsing (target namespace, SOAP address, `soapAction`s)
//! - Envelope encoding with per-element namespace declarations
//! - SOAP 1.1 / 1.2 fault detection
//! - Timeout, basic auth and endpoint override options

pub mod client;
pub mod envelope;
pub mod error;
pub mod wsdl;
pub mod xml;

// Re-export main types for convenience
pub use client::{BasicAuth, ClientOptions, OPERATION_PREFIX, SoapClient};
pub use envelope::{SOAP_ENV_NAMESPACE, decode_envelope, encode_envelope};
pub use error::SoapError;
pub use wsdl::ServiceDescription;
pub use xml::{Namespace, NamespacedList, XSI_NAMESPACE, XmlElement};

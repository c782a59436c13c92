//! Error types for the SOAP client

use thiserror::Error;

/// Errors that can occur while talking to a SOAP service
#[derive(Debug, Error)]
pub enum SoapError {
    /// HTTP request failed (message from the HTTP library, unmodified)
    #[error("{0}")]
    Request(String),

    /// Service returned a non-success HTTP status without a SOAP fault
    #[error("HTTP error (status {status}): {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Service answered with a SOAP fault
    #[error("SOAP fault {code}: {reason}")]
    Fault {
        /// Fault code (`faultcode` or `Code/Value`)
        code: String,
        /// Human-readable reason (`faultstring` or `Reason/Text`)
        reason: String,
    },

    /// Service description could not be understood
    #[error("Invalid service description: {0}")]
    Wsdl(String),

    /// Document is not well-formed XML
    #[error("XML error: {0}")]
    Xml(String),

    /// Expected element is absent
    #[error("Missing element <{name}> in <{parent}>")]
    MissingElement {
        /// Local name of the element that was searched
        parent: String,
        /// Local name of the missing child
        name: String,
    },

    /// Element holds a value that cannot be interpreted
    #[error("Invalid value for <{name}>: {value:?}")]
    InvalidValue {
        /// Local name of the element
        name: String,
        /// Offending text
        value: String,
    },

    /// Operation is not bound in the service description
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

impl From<quick_xml::Error> for SoapError {
    fn from(error: quick_xml::Error) -> Self {
        Self::Xml(error.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for SoapError {
    fn from(error: quick_xml::events::attributes::AttrError) -> Self {
        Self::Xml(error.to_string())
    }
}

impl From<std::io::Error> for SoapError {
    fn from(error: std::io::Error) -> Self {
        Self::Xml(error.to_string())
    }
}

impl From<reqwest::Error> for SoapError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(error.to_string())
    }
}

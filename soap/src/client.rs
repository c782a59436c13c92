//! SOAP client bound to a fetched service description

use crate::{
    envelope::{decode_envelope, encode_envelope},
    error::SoapError,
    wsdl::ServiceDescription,
    xml::XmlElement,
};
use reqwest::Client;
use std::time::Duration;

/// Prefix bound to the service's target namespace on operation elements
pub const OPERATION_PREFIX: &str = "tns";

/// HTTP basic credentials
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicAuth {
    /// User name
    pub username: String,
    /// Password
    pub password: String,
}

/// Connection options passed through to the HTTP transport
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// Per-request timeout (none by default)
    pub timeout: Option<Duration>,
    /// Credentials attached to every request when set
    pub basic_auth: Option<BasicAuth>,
    /// Post operations here instead of the WSDL's SOAP address
    pub endpoint: Option<String>,
}

impl ClientOptions {
    /// Builder: Set timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builder: Set basic credentials
    #[must_use]
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some(BasicAuth {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Builder: Override the endpoint from the service description
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

/// SOAP 1.1 client
#[derive(Clone, Debug)]
pub struct SoapClient {
    http: Client,
    description: ServiceDescription,
    endpoint: String,
    basic_auth: Option<BasicAuth>,
}

impl SoapClient {
    /// Fetch the service description at `wsdl_url` and bind a client to it
    ///
    /// # Errors
    ///
    /// - `SoapError::Request` if the description cannot be fetched
    /// - `SoapError::Http` if the server answers with a non-success status
    /// - `SoapError::Xml` / `SoapError::Wsdl` if it cannot be parsed
    pub async fn create(wsdl_url: &str, options: &ClientOptions) -> Result<Self, SoapError> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        tracing::debug!(url = wsdl_url, "Fetching service description");
        let mut request = http.get(wsdl_url);
        if let Some(auth) = &options.basic_auth {
            request = request.basic_auth(&auth.username, Some(&auth.password));
        }
        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SoapError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let description = ServiceDescription::parse(&body)?;
        let endpoint = options
            .endpoint
            .clone()
            .unwrap_or_else(|| description.address().to_string());

        Ok(Self {
            http,
            description,
            endpoint,
            basic_auth: options.basic_auth.clone(),
        })
    }

    /// Service description this client is bound to
    #[must_use]
    pub const fn description(&self) -> &ServiceDescription {
        &self.description
    }

    /// Endpoint operations are posted to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Invoke `operation` with `parameters` and return its `<operation>Response` element
    ///
    /// Parameters must already be qualified with [`OPERATION_PREFIX`].
    ///
    /// # Errors
    ///
    /// - `SoapError::UnknownOperation` if the operation is not bound
    /// - `SoapError::Request` on network failure
    /// - `SoapError::Fault` if the service answers with a SOAP fault
    /// - `SoapError::Http` on a non-success status without a fault
    /// - `SoapError::MissingElement` / `SoapError::Xml` for malformed responses
    pub async fn call(
        &self,
        operation: &str,
        parameters: Vec<XmlElement>,
    ) -> Result<XmlElement, SoapError> {
        let action = self
            .description
            .soap_action(operation)
            .ok_or_else(|| SoapError::UnknownOperation(operation.to_string()))?;

        let payload = XmlElement::new(format!("{OPERATION_PREFIX}:{operation}"))
            .with_attribute(
                format!("xmlns:{OPERATION_PREFIX}"),
                self.description.target_namespace(),
            )
            .with_children(parameters);
        let envelope = encode_envelope(payload)?;

        tracing::debug!(operation, endpoint = %self.endpoint, "Invoking SOAP operation");
        let mut request = self
            .http
            .post(&self.endpoint)
            .header("content-type", "text/xml; charset=utf-8")
            .header("soapaction", format!("\"{action}\""))
            .body(envelope);
        if let Some(auth) = &self.basic_auth {
            request = request.basic_auth(&auth.username, Some(&auth.password));
        }
        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await?;

        let payload = match decode_envelope(&body) {
            Ok(payload) if status.is_success() => payload,
            Err(fault @ SoapError::Fault { .. }) => return Err(fault),
            Ok(_) | Err(_) if !status.is_success() => {
                return Err(SoapError::Http {
                    status: status.as_u16(),
                    body,
                });
            }
            Ok(payload) => payload,
            Err(e) => return Err(e),
        };

        let expected = format!("{operation}Response");
        if payload.local_name() != expected {
            return Err(SoapError::MissingElement {
                parent: "Body".to_string(),
                name: expected,
            });
        }
        Ok(payload)
    }
}

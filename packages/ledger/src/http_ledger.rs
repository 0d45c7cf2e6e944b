//! HTTP implementation of [`LedgerService`] against a REST gateway.
//!
//! The gateway speaks the node API the deployment runs behind: rounds from
//! `/v2/status`, store state as base64-encoded key-value pairs with tagged
//! values (type 1 = bytes, type 2 = uint), operation submission and pending
//! status by operation id. Signing and fees happen gateway-side.

use std::collections::HashMap;
use std::time::Duration;

use base64::Engine;
use bytes::Bytes;
use http::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use slotlist_codec::SlotValue;
use slotlist_model::{FlatEntry, Snapshot};

use crate::{LedgerError, LedgerService, Operation, OperationId, StoreId};

const BASE64: base64::engine::GeneralPurpose = base64::engine::general_purpose::STANDARD;

/// Blocking HTTP client for the ledger gateway.
pub struct HttpLedger {
    client: Client,
    base_url: url::Url,
    default_headers: HashMap<String, String>,
}

impl HttpLedger {
    /// Create a client with the given request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, LedgerError> {
        let base_url = url::Url::parse(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            default_headers: HashMap::new(),
        })
    }

    /// Create with the default timeout of 30 seconds.
    pub fn new(base_url: &str) -> Result<Self, LedgerError> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    /// Add a header sent with every request.
    pub fn with_default_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Convenience for the gateway's API token header.
    pub fn with_api_token(self, token: impl Into<String>) -> Self {
        self.with_default_header("X-API-Token", token)
    }

    fn url(&self, path: &str) -> Result<url::Url, LedgerError> {
        Ok(self.base_url.join(path)?)
    }

    fn apply_headers(
        &self,
        mut builder: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        for (name, value) in &self.default_headers {
            builder = builder.header(name, value);
        }
        builder
    }

    fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, LedgerError> {
        let response = self
            .apply_headers(self.client.get(self.url(path)?))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(LedgerError::Status {
                status: status.as_u16(),
                message: error_message(response),
            });
        }

        response.json().map_err(LedgerError::from)
    }
}

/// Extract the gateway's error message from a failed response, falling
/// back to the raw body.
fn error_message(response: reqwest::blocking::Response) -> String {
    let body = response.text().unwrap_or_default();
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.message,
        Err(_) => body,
    }
}

impl LedgerService for HttpLedger {
    fn current_round(&mut self) -> Result<u64, LedgerError> {
        let status: RoundStatus = self.get_json("v2/status")?;
        Ok(status.last_round)
    }

    fn flat_snapshot(&mut self, store_id: StoreId) -> Result<Snapshot, LedgerError> {
        let response: StateResponse = self.get_json(&format!("v2/stores/{}/state", store_id))?;
        response
            .state
            .into_iter()
            .map(WireEntry::into_flat_entry)
            .collect()
    }

    fn submit(&mut self, operation: &Operation) -> Result<OperationId, LedgerError> {
        let body = SubmitRequest {
            store_id: operation.store_id,
            args: operation
                .wire_args()
                .iter()
                .map(|arg| BASE64.encode(arg))
                .collect(),
        };

        let response = self
            .apply_headers(self.client.post(self.url("v2/operations")?))
            .json(&body)
            .send()?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            // The contract refused the call (failed assertion, unknown
            // tag). Other 4xx - bad token, wrong path - are gateway
            // failures with no ledger-side outcome, not rejections.
            return Err(LedgerError::Rejected {
                message: error_message(response),
            });
        }
        if !status.is_success() {
            return Err(LedgerError::Status {
                status: status.as_u16(),
                message: error_message(response),
            });
        }

        let submitted: SubmitResponse = response.json()?;
        tracing::debug!(operation_id = %submitted.operation_id, tag = %operation.tag, "operation submitted");
        Ok(OperationId::new(submitted.operation_id))
    }

    fn pending_status(&mut self, id: &OperationId) -> Result<Option<u64>, LedgerError> {
        let path = format!("v2/operations/pending/{}", id);
        let response = self
            .apply_headers(self.client.get(self.url(&path)?))
            .send()?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            // The gateway has not seen the operation yet; still pending.
            return Ok(None);
        }
        if !status.is_success() {
            return Err(LedgerError::Status {
                status: status.as_u16(),
                message: error_message(response),
            });
        }

        let pending: PendingResponse = response.json()?;
        Ok((pending.confirmed_round > 0).then_some(pending.confirmed_round))
    }

    fn wait_for_round_after(&mut self, round: u64) -> Result<u64, LedgerError> {
        let status: RoundStatus =
            self.get_json(&format!("v2/status/wait-for-block-after/{}", round))?;
        Ok(status.last_round)
    }
}

// Gateway wire shapes

#[derive(Deserialize)]
struct RoundStatus {
    #[serde(rename = "last-round")]
    last_round: u64,
}

#[derive(Deserialize)]
struct StateResponse {
    #[serde(default)]
    state: Vec<WireEntry>,
}

#[derive(Deserialize)]
struct WireEntry {
    key: String,
    value: WireValue,
}

#[derive(Deserialize)]
struct WireValue {
    #[serde(rename = "type")]
    kind: u8,
    #[serde(default)]
    bytes: String,
    #[serde(default)]
    uint: u64,
}

const KIND_BYTES: u8 = 1;
const KIND_UINT: u8 = 2;

impl WireEntry {
    fn into_flat_entry(self) -> Result<FlatEntry, LedgerError> {
        let key = decode_base64(&self.key)?;
        let value = match self.value.kind {
            KIND_BYTES => SlotValue::Bytes(decode_base64(&self.value.bytes)?.to_vec()),
            KIND_UINT => SlotValue::Uint(self.value.uint),
            other => {
                return Err(LedgerError::MalformedResponse {
                    message: format!("unknown value kind {}", other),
                })
            }
        };
        Ok(FlatEntry { key, value })
    }
}

fn decode_base64(encoded: &str) -> Result<Bytes, LedgerError> {
    BASE64
        .decode(encoded)
        .map(Bytes::from)
        .map_err(|e| LedgerError::MalformedResponse {
            message: format!("invalid base64: {}", e),
        })
}

#[derive(Serialize)]
struct SubmitRequest {
    #[serde(rename = "store-id")]
    store_id: StoreId,
    /// Positional argument list, tag first, each entry base64-encoded
    /// wire bytes.
    args: Vec<String>,
}

#[derive(Deserialize)]
struct SubmitResponse {
    #[serde(rename = "operation-id")]
    operation_id: String,
}

#[derive(Deserialize)]
struct PendingResponse {
    #[serde(rename = "confirmed-round", default)]
    confirmed_round: u64,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

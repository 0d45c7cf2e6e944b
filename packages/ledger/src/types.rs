//! Operation and identifier types for the ledger interface.

use slotlist_codec::SlotValue;

/// Identifier of one deployed flat store on the ledger.
pub type StoreId = u64;

/// Opaque identifier of a submitted operation, assigned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationId(String);

impl OperationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OperationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One mutating request against a store: a tag plus positional arguments.
///
/// Arguments reuse the value codec's two-kind model so that their wire
/// encoding matches stored values exactly. Indices must always be added
/// with [`Operation::arg_uint`] - the contract parses them as fixed-width
/// big-endian u64, and a decimal text index is silently wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub store_id: StoreId,
    pub tag: String,
    pub args: Vec<SlotValue>,
}

impl Operation {
    pub fn new(store_id: StoreId, tag: impl Into<String>) -> Self {
        Self {
            store_id,
            tag: tag.into(),
            args: Vec::new(),
        }
    }

    /// Append a byte-string argument.
    pub fn arg_text(mut self, text: &str) -> Self {
        self.args.push(SlotValue::from(text));
        self
    }

    /// Append a fixed-width unsigned-integer argument.
    pub fn arg_uint(mut self, value: u64) -> Self {
        self.args.push(SlotValue::Uint(value));
        self
    }

    /// The positional argument list as raw wire bytes, tag first.
    ///
    /// This is the argument vector the contract dispatches on.
    pub fn wire_args(&self) -> Vec<Vec<u8>> {
        let mut wire = Vec::with_capacity(self.args.len() + 1);
        wire.push(self.tag.as_bytes().to_vec());
        wire.extend(self.args.iter().map(SlotValue::to_wire_bytes));
        wire
    }
}

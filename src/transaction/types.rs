//! Transaction intent model.
//!
//! A [`ProgrammableTransaction`] is what builder closures produce: inputs plus
//! commands, with no sender or gas data attached. A [`TransactionIntent`] is
//! what signers accept; it is either such a locally built transaction or an
//! opaque byte payload that already carries sender and gas (as returned by a
//! sponsor).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use borsh::{BorshDeserialize, BorshSerialize};
use thiserror::Error;

/// A pure value or object reference fed into commands.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum CallArg {
    /// Serialized pure value (u64, address, vector<u8>, ...).
    Pure(Vec<u8>),
    /// Object id.
    Object(String),
}

/// Reference to a value available while the transaction executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum Argument {
    GasCoin,
    Input(u16),
    Result(u16),
    NestedResult(u16, u16),
}

/// `package::module::function<type_arguments>(arguments)`.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct MoveCall {
    pub package: String,
    pub module: String,
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum Command {
    MoveCall(MoveCall),
    TransferObjects {
        objects: Vec<Argument>,
        recipient: Argument,
    },
    SplitCoins {
        coin: Argument,
        amounts: Vec<Argument>,
    },
}

/// Transaction kind: what to execute, without who pays for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ProgrammableTransaction {
    pub inputs: Vec<CallArg>,
    pub commands: Vec<Command>,
}

/// Kind plus sender; the payload a wallet signs for a self-paid transaction.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct TransactionData {
    pub sender: String,
    pub kind: ProgrammableTransaction,
}

/// Built-but-unsigned transaction handed to a signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionIntent {
    /// Built locally; sender and gas are filled in by whoever signs.
    Programmable(ProgrammableTransaction),
    /// Fully serialized transaction data produced elsewhere.
    Serialized(Vec<u8>),
}

impl TransactionIntent {
    /// Wrap opaque transaction bytes without interpreting them.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        TransactionIntent::Serialized(bytes.into())
    }

    /// Decode base64 transaction bytes.
    pub fn from_base64(encoded: &str) -> Result<Self, TransactionError> {
        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| TransactionError::Encoding(e.to_string()))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Serialize only the transaction kind (no sender, no gas).
    pub fn to_kind_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        match self {
            TransactionIntent::Programmable(kind) => {
                borsh::to_vec(kind).map_err(|e| TransactionError::Serialization(e.to_string()))
            }
            TransactionIntent::Serialized(_) => Err(TransactionError::KindUnavailable),
        }
    }

    /// Bytes a wallet signs when `sender` is the signing account.
    ///
    /// Serialized intents already name their sender and are returned as-is.
    pub fn to_signing_bytes(&self, sender: &str) -> Result<Vec<u8>, TransactionError> {
        match self {
            TransactionIntent::Programmable(kind) => {
                let data = TransactionData {
                    sender: sender.to_string(),
                    kind: kind.clone(),
                };
                borsh::to_vec(&data).map_err(|e| TransactionError::Serialization(e.to_string()))
            }
            TransactionIntent::Serialized(bytes) => Ok(bytes.clone()),
        }
    }

    pub fn is_serialized(&self) -> bool {
        matches!(self, TransactionIntent::Serialized(_))
    }
}

impl From<ProgrammableTransaction> for TransactionIntent {
    fn from(kind: ProgrammableTransaction) -> Self {
        TransactionIntent::Programmable(kind)
    }
}

/// Base64 transport encoding used by the sponsor and fullnode APIs.
pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Errors raised while building or serializing transactions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Invalid transaction encoding: {0}")]
    Encoding(String),

    #[error("Transaction kind is not available for pre-serialized transactions")]
    KindUnavailable,

    #[error("Argument index {0} is out of range")]
    ArgumentOutOfRange(usize),

    #[error("Invalid Move call target '{0}', expected package::module::function")]
    InvalidTarget(String),
}

//! Transaction intents, their construction, and submission results.

pub mod builder;
pub mod response;
pub mod types;

pub use builder::TransactionBuilder;
pub use response::{ExecutionResult, SignedTransaction};
pub use types::{
    encode_base64, Argument, CallArg, Command, MoveCall, ProgrammableTransaction, TransactionData,
    TransactionError, TransactionIntent,
};

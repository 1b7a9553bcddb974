//! Fluent construction of programmable transactions.

use crate::transaction::types::{
    Argument, CallArg, Command, MoveCall, ProgrammableTransaction, TransactionError,
};

/// Accumulates inputs and commands, handing back [`Argument`]s that later
/// commands can reference.
#[derive(Debug, Default, Clone)]
pub struct TransactionBuilder {
    inputs: Vec<CallArg>,
    commands: Vec<Command>,
    /// Length at which an input or command index stopped fitting in `u16`.
    overflow: Option<usize>,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The coin paying for gas.
    pub fn gas(&self) -> Argument {
        Argument::GasCoin
    }

    /// Add a pre-serialized pure input.
    pub fn pure(&mut self, bytes: impl Into<Vec<u8>>) -> Argument {
        self.push_input(CallArg::Pure(bytes.into()))
    }

    pub fn pure_u64(&mut self, value: u64) -> Argument {
        self.pure(value.to_le_bytes().to_vec())
    }

    pub fn pure_string(&mut self, value: &str) -> Result<Argument, TransactionError> {
        let bytes =
            borsh::to_vec(value).map_err(|e| TransactionError::Serialization(e.to_string()))?;
        Ok(self.pure(bytes))
    }

    /// Add an object input by id.
    pub fn object(&mut self, id: impl Into<String>) -> Argument {
        self.push_input(CallArg::Object(id.into()))
    }

    /// Call `package::module::function`.
    pub fn move_call(
        &mut self,
        target: &str,
        type_arguments: Vec<String>,
        arguments: Vec<Argument>,
    ) -> Result<Argument, TransactionError> {
        let mut parts = target.split("::");
        let (package, module, function) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(p), Some(m), Some(f), None) if !p.is_empty() && !m.is_empty() && !f.is_empty() => {
                (p, m, f)
            }
            _ => return Err(TransactionError::InvalidTarget(target.to_string())),
        };

        Ok(self.push_command(Command::MoveCall(MoveCall {
            package: package.to_string(),
            module: module.to_string(),
            function: function.to_string(),
            type_arguments,
            arguments,
        })))
    }

    pub fn transfer_objects(&mut self, objects: Vec<Argument>, recipient: Argument) -> Argument {
        self.push_command(Command::TransferObjects { objects, recipient })
    }

    pub fn split_coins(&mut self, coin: Argument, amounts: Vec<Argument>) -> Argument {
        self.push_command(Command::SplitCoins { coin, amounts })
    }

    /// Finish, checking every argument refers to an existing input or an earlier command.
    pub fn build(self) -> Result<ProgrammableTransaction, TransactionError> {
        if let Some(len) = self.overflow {
            return Err(TransactionError::ArgumentOutOfRange(len));
        }
        for (position, command) in self.commands.iter().enumerate() {
            for arg in command_arguments(command) {
                self.check_argument(arg, position)?;
            }
        }
        Ok(ProgrammableTransaction {
            inputs: self.inputs,
            commands: self.commands,
        })
    }

    fn check_argument(&self, arg: &Argument, position: usize) -> Result<(), TransactionError> {
        match *arg {
            Argument::GasCoin => Ok(()),
            Argument::Input(i) if (i as usize) < self.inputs.len() => Ok(()),
            Argument::Result(i) | Argument::NestedResult(i, _) if (i as usize) < position => Ok(()),
            Argument::Input(i) | Argument::Result(i) | Argument::NestedResult(i, _) => {
                Err(TransactionError::ArgumentOutOfRange(i as usize))
            }
        }
    }

    // Past u16::MAX the item is dropped and build() fails.
    fn push_input(&mut self, arg: CallArg) -> Argument {
        match u16::try_from(self.inputs.len()) {
            Ok(index) => {
                self.inputs.push(arg);
                Argument::Input(index)
            }
            Err(_) => {
                self.overflow.get_or_insert(self.inputs.len());
                Argument::Input(u16::MAX)
            }
        }
    }

    fn push_command(&mut self, command: Command) -> Argument {
        match u16::try_from(self.commands.len()) {
            Ok(index) => {
                self.commands.push(command);
                Argument::Result(index)
            }
            Err(_) => {
                self.overflow.get_or_insert(self.commands.len());
                Argument::Result(u16::MAX)
            }
        }
    }
}

fn command_arguments(command: &Command) -> Vec<&Argument> {
    match command {
        Command::MoveCall(call) => call.arguments.iter().collect(),
        Command::TransferObjects { objects, recipient } => {
            objects.iter().chain(std::iter::once(recipient)).collect()
        }
        Command::SplitCoins { coin, amounts } => std::iter::once(coin).chain(amounts.iter()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_transfer() {
        let mut tx = TransactionBuilder::new();
        let amount = tx.pure_u64(1_000);
        let coin = tx.split_coins(tx.gas(), vec![amount]);
        let recipient = tx.pure(vec![0xab; 32]);
        tx.transfer_objects(vec![coin], recipient);

        let built = tx.build().unwrap();
        assert_eq!(built.inputs.len(), 2);
        assert_eq!(built.commands.len(), 2);
        assert_eq!(coin, Argument::Result(0));
    }

    #[test]
    fn test_move_call_target_parsing() {
        let mut tx = TransactionBuilder::new();
        let game = tx.object("0xgame");
        let result = tx.move_call("0x2::rps::play", vec![], vec![game]).unwrap();
        assert_eq!(result, Argument::Result(0));

        let built = tx.build().unwrap();
        match &built.commands[0] {
            Command::MoveCall(call) => {
                assert_eq!(call.package, "0x2");
                assert_eq!(call.module, "rps");
                assert_eq!(call.function, "play");
            }
            other => panic!("unexpected command {:?}", other),
        }

        let mut tx = TransactionBuilder::new();
        assert!(matches!(
            tx.move_call("0x2::rps", vec![], vec![]),
            Err(TransactionError::InvalidTarget(_))
        ));
    }

    #[test]
    fn test_pure_string_is_length_prefixed() {
        let mut tx = TransactionBuilder::new();
        let name = tx.pure_string("rps").unwrap();
        assert_eq!(name, Argument::Input(0));

        let built = tx.build().unwrap();
        assert_eq!(built.inputs[0], CallArg::Pure(vec![3, 0, 0, 0, b'r', b'p', b's']));
    }

    #[test]
    fn test_too_many_inputs_fails_build() {
        let mut tx = TransactionBuilder::new();
        let last = (0..=u16::MAX).map(|_| tx.pure(Vec::new())).last();
        assert_eq!(last, Some(Argument::Input(u16::MAX)));

        // The 65537th input has no index; it must not wrap around to Input(0).
        let overflowed = tx.pure(vec![1]);
        tx.transfer_objects(vec![overflowed], Argument::Input(0));
        assert_eq!(
            tx.build(),
            Err(TransactionError::ArgumentOutOfRange(u16::MAX as usize + 1))
        );
    }

    #[test]
    fn test_forward_reference_rejected() {
        let mut tx = TransactionBuilder::new();
        tx.transfer_objects(vec![Argument::Result(0)], Argument::Input(3));
        assert_eq!(tx.build(), Err(TransactionError::ArgumentOutOfRange(0)));
    }
}

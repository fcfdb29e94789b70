use bind::{CallOpts, TransactOpts};

/// A contract binding borrowed together with the options applied to every
/// call and transaction made through it.
///
/// Each facade defines `Session`, `CallerSession` and `TransactorSession`
/// aliases of this type; its methods drop the explicit options argument.
#[derive(Debug, Clone)]
pub struct Session<'a, K> {
    pub contract: &'a K,
    pub call_opts: CallOpts,
    pub transact_opts: TransactOpts,
}

impl<'a, K> Session<'a, K> {
    pub const fn new(contract: &'a K, call_opts: CallOpts, transact_opts: TransactOpts) -> Self {
        Self {
            contract,
            call_opts,
            transact_opts,
        }
    }

    pub const fn contract(&self) -> &'a K {
        self.contract
    }
}

//! Facade skeletons shared by every contract.
//!
//! Each contract module declares its facade type, then lists its calls,
//! transactions and events. The macros expand those lists into methods that
//! delegate to [`bind::BoundContract`].
//!
//! A call is built from its `sol!` struct: `fooCall { a: a }` for named
//! parameters, `fooCall(a)` for a single unnamed one.

/// Declare a facade type with its role aliases, session aliases and
/// constructors.
macro_rules! contract_facade {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
        metadata: $metadata:path;
        caller: $caller:ident;
        transactor: $transactor:ident;
        filterer: $filterer:ident;
        session: $session:ident;
        caller_session: $caller_session:ident;
        transactor_session: $transactor_session:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<C, T = C, F = C> {
            contract: ::bind::BoundContract<C, T, F>,
        }

        /// Read-only binding.
        pub type $caller<C> = $name<C, (), ()>;
        /// Write-only binding.
        pub type $transactor<T> = $name<(), T, ()>;
        /// Log filtering binding.
        pub type $filterer<F> = $name<(), (), F>;

        /// Binding with pre-set call and transact options.
        pub type $session<'a, C, T = C, F = C> = $crate::Session<'a, $name<C, T, F>>;
        /// Read-only binding with pre-set call options.
        pub type $caller_session<'a, C> = $crate::Session<'a, $caller<C>>;
        /// Write-only binding with pre-set transact options.
        pub type $transactor_session<'a, T> = $crate::Session<'a, $transactor<T>>;

        impl<B: Clone> $name<B> {
            /// Bind to a deployed contract using one backend for every role.
            pub fn new(address: ::alloy_primitives::Address, backend: B) -> Self {
                Self {
                    contract: ::bind::BoundContract::new(address, &$metadata, backend),
                }
            }
        }

        impl<C> $name<C, (), ()> {
            pub fn new_caller(address: ::alloy_primitives::Address, caller: C) -> Self {
                Self::from_bound(::bind::BoundContract::from_parts(
                    address,
                    &$metadata,
                    caller,
                    (),
                    (),
                ))
            }
        }

        impl<T> $name<(), T, ()> {
            pub fn new_transactor(address: ::alloy_primitives::Address, transactor: T) -> Self {
                Self::from_bound(::bind::BoundContract::from_parts(
                    address,
                    &$metadata,
                    (),
                    transactor,
                    (),
                ))
            }
        }

        impl<F> $name<(), (), F> {
            pub fn new_filterer(address: ::alloy_primitives::Address, filterer: F) -> Self {
                Self::from_bound(::bind::BoundContract::from_parts(
                    address,
                    &$metadata,
                    (),
                    (),
                    filterer,
                ))
            }
        }

        impl<C, T, F> $name<C, T, F> {
            pub const fn from_bound(contract: ::bind::BoundContract<C, T, F>) -> Self {
                Self { contract }
            }

            pub const fn address(&self) -> ::alloy_primitives::Address {
                self.contract.address()
            }

            /// Underlying generic binding, for by-name access.
            pub const fn bound(&self) -> &::bind::BoundContract<C, T, F> {
                &self.contract
            }

            /// Borrow this binding with fixed options.
            pub const fn session(
                &self,
                call_opts: ::bind::CallOpts,
                transact_opts: ::bind::TransactOpts,
            ) -> $crate::Session<'_, Self> {
                $crate::Session::new(self, call_opts, transact_opts)
            }

            pub fn caller_session(&self, call_opts: ::bind::CallOpts) -> $crate::Session<'_, Self> {
                $crate::Session::new(self, call_opts, ::bind::TransactOpts::default())
            }

            pub fn transactor_session(
                &self,
                transact_opts: ::bind::TransactOpts,
            ) -> $crate::Session<'_, Self> {
                $crate::Session::new(self, ::bind::CallOpts::default(), transact_opts)
            }
        }
    };
}

/// Read-only methods, on the facade (explicit [`bind::CallOpts`]) and on its
/// sessions (pre-set options).
macro_rules! calls {
    (
        $name:ident;
        $(
            $(#[$meta:meta])*
            fn $method:ident($($arg:ident: $ty:ty),*) -> $ret:ty
                => $call:ident $init:tt;
        )*
    ) => {
        impl<C: ::bind::ContractCaller, T, F> $name<C, T, F> {
            $(
                $(#[$meta])*
                pub async fn $method(
                    &self,
                    opts: &::bind::CallOpts,
                    $($arg: $ty),*
                ) -> ::bind::Result<$ret> {
                    self.contract.call(opts, &$call $init).await
                }
            )*
        }

        impl<C: ::bind::ContractCaller, T, F> $crate::Session<'_, $name<C, T, F>> {
            $(
                $(#[$meta])*
                pub async fn $method(&self, $($arg: $ty),*) -> ::bind::Result<$ret> {
                    self.contract.$method(&self.call_opts, $($arg),*).await
                }
            )*
        }
    };
}

/// State-changing methods, on the facade (explicit [`bind::TransactOpts`])
/// and on its sessions (pre-set options).
macro_rules! transactions {
    (
        $name:ident;
        $(
            $(#[$meta:meta])*
            fn $method:ident($($arg:ident: $ty:ty),*)
                => $call:ident $init:tt;
        )*
    ) => {
        impl<C, T: ::bind::ContractTransactor, F> $name<C, T, F> {
            $(
                $(#[$meta])*
                pub async fn $method(
                    &self,
                    opts: &::bind::TransactOpts,
                    $($arg: $ty),*
                ) -> ::bind::Result<::bind::SentTransaction> {
                    self.contract.transact(opts, &$call $init).await
                }
            )*
        }

        impl<C, T: ::bind::ContractTransactor, F> $crate::Session<'_, $name<C, T, F>> {
            $(
                $(#[$meta])*
                pub async fn $method(
                    &self,
                    $($arg: $ty),*
                ) -> ::bind::Result<::bind::SentTransaction> {
                    self.contract.$method(&self.transact_opts, $($arg),*).await
                }
            )*
        }
    };
}

/// Per-event filter, watch and parse methods plus an iterator alias.
///
/// Indexed arguments become `&[value]` filters; an empty slice matches any
/// value at that position.
macro_rules! events {
    (
        $name:ident;
        $(
            $(#[$meta:meta])*
            $event:ty => $iterator:ident {
                filter: $filter:ident,
                watch: $watch:ident,
                parse: $parse:ident,
                indexed: [$($index:literal => $arg:ident: $sol:ty),*] $(,)?
            }
        )*
    ) => {
        $(
            $(#[$meta])*
            pub type $iterator = ::bind::LogIterator<$event>;
        )*

        impl<C, T, F: ::bind::ContractFilterer> $name<C, T, F> {
            $(
                pub async fn $filter(
                    &self,
                    opts: &::bind::FilterOpts,
                    $($arg: &[<$sol as ::alloy_sol_types::SolType>::RustType]),*
                ) -> ::bind::Result<$iterator> {
                    let topics = ::bind::TopicFilter::any()
                        $(.with::<$sol>($index, $arg))*;
                    self.contract.filter_logs::<$event>(opts, topics).await
                }

                pub async fn $watch(
                    &self,
                    opts: &::bind::WatchOpts,
                    sink: ::tokio::sync::mpsc::Sender<::bind::DecodedLog<$event>>,
                    $($arg: &[<$sol as ::alloy_sol_types::SolType>::RustType]),*
                ) -> ::bind::Result<::bind::Subscription> {
                    let topics = ::bind::TopicFilter::any()
                        $(.with::<$sol>($index, $arg))*;
                    self.contract.watch_logs::<$event>(opts, topics, sink).await
                }
            )*
        }

        impl<C, T, F> $name<C, T, F> {
            $(
                pub fn $parse(
                    &self,
                    log: &::alloy_rpc_types_eth::Log,
                ) -> ::bind::Result<::bind::DecodedLog<$event>> {
                    self.contract.unpack_log::<$event>(log)
                }
            )*
        }
    };
}

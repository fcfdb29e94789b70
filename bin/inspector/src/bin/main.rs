use alloy_primitives::{Address, Bytes};
use bind::{CallOpts, FilterOpts, TransactOpts, WatchOpts};
use clap::{Parser, Subcommand};
use client::{ProviderBackend, RemoteSigner};
use config::{ChainConfig, Config};
use contracts::{SuperDestinationExecutorSimulations, SuperGovernor, SuperSignatureStorageOverride};
use inspector::{
    executor_events, executor_status, governor_events, governor_status, install_prometheus_exporter,
    run_watches, watch_executor, watch_governor, ContractKind, Metrics,
};
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::info;

/// Buffer of decoded events waiting to be logged.
const RECORD_CAPACITY: usize = 256;

#[derive(Parser)]
#[command(name = "inspector")]
#[command(about = "Inspect Superform executor, governor and signature storage contracts")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml", env = "INSPECTOR_CONFIG")]
    config: String,

    /// Chain name from the configuration file
    #[arg(long, env = "INSPECTOR_CHAIN")]
    chain: String,

    /// Override the configured RPC endpoint
    #[arg(long, env = "RPC_URL")]
    rpc_url: Option<String>,

    /// Block to read state at (latest when unset)
    #[arg(long)]
    block: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Executor module state for an account
    ExecutorStatus {
        #[arg(long)]
        account: Address,
    },

    /// Signature stored for an account
    Signature {
        #[arg(long)]
        account: Address,
    },

    /// Store signature data for an account
    StoreSignature {
        #[arg(long)]
        account: Address,

        /// Hex encoded signature data
        #[arg(long)]
        signature: Bytes,

        /// Private key for signing (hex string, with or without 0x prefix)
        #[arg(short = 'k', long, env = "PRIVATE_KEY", required_unless_present = "signer_proxy")]
        private_key: Option<String>,

        /// Sign through a signer-proxy instead of a local key
        #[arg(long, env = "SIGNER_PROXY_URL", requires = "from")]
        signer_proxy: Option<String>,

        /// Address whose key the signer-proxy holds
        #[arg(long)]
        from: Option<Address>,

        /// Sign without broadcasting
        #[arg(long)]
        dry_run: bool,
    },

    /// Governor hooks root, timelock, fees and registered hooks
    GovernorStatus {
        /// Also report the registration of this hook
        #[arg(long)]
        hook: Option<Address>,
    },

    /// Historical events of a contract
    Events {
        #[arg(long, value_enum)]
        contract: ContractKind,

        /// First block to scan (deployment start block when unset)
        #[arg(long)]
        from_block: Option<u64>,

        /// Last block to scan (latest when unset)
        #[arg(long)]
        to_block: Option<u64>,
    },

    /// Live events of a contract until Ctrl-C
    Watch {
        #[arg(long, value_enum)]
        contract: ContractKind,

        /// Replay events from this block before following new ones
        #[arg(long)]
        from_block: Option<u64>,

        /// Serve Prometheus metrics on this port
        #[arg(long, env = "METRICS_PORT")]
        metrics_port: Option<u16>,
    },
}

fn deployment(chain: &ChainConfig, contract: &str, address: Option<Address>) -> eyre::Result<Address> {
    address.ok_or_else(|| eyre::eyre!("No {contract} deployment configured for chain {}", chain.name))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_file(&cli.config)?;
    let chain = config.chain(&cli.chain)?;
    let rpc_url = cli.rpc_url.as_deref().unwrap_or(&chain.rpc_url);

    info!(chain = %chain.name, chain_id = chain.chain_id, "Loaded config");

    let provider = client::create_provider(rpc_url)?;
    client::verify_chain_id(&provider, chain.chain_id).await?;

    let backend = ProviderBackend::new(provider.clone())
        .with_max_block_range(chain.max_block_range)
        .with_poll_interval(chain.poll_interval());
    let call_opts = cli.block.map_or_else(CallOpts::default, CallOpts::at_block);
    let deployments = chain.deployments;

    match cli.command {
        Command::ExecutorStatus { account } => {
            let address = deployment(chain, "executor", deployments.executor)?;
            let executor = SuperDestinationExecutorSimulations::new_caller(address, backend);

            let status = executor_status(&executor, call_opts, account).await?;

            info!(
                account = %status.account,
                initialized = status.initialized,
                name = %status.name,
                version = %status.version,
                ledger_configuration = %status.ledger_configuration,
                destination_validator = %status.destination_validator,
                "Executor status"
            );
        }
        Command::Signature { account } => {
            let address = deployment(chain, "signature storage", deployments.signature_storage)?;
            let storage = SuperSignatureStorageOverride::new_caller(address, backend);

            let signature = storage.retrieve_signature_data(&call_opts, account).await?;

            if signature.is_empty() {
                info!(account = %account, "No signature stored");
            } else {
                info!(account = %account, signature = %signature, "Stored signature");
            }
        }
        Command::StoreSignature {
            account,
            signature,
            private_key,
            signer_proxy,
            from,
            dry_run,
        } => {
            let address = deployment(chain, "signature storage", deployments.signature_storage)?;
            let signer = match (signer_proxy, from, private_key) {
                (Some(proxy_url), Some(from), _) => {
                    info!(proxy = %proxy_url, from = %from, "Signing through signer-proxy");
                    let remote = RemoteSigner::new(proxy_url, from, chain.chain_id);
                    client::remote_signer_fn(remote, provider)
                }
                (_, _, Some(private_key)) => {
                    client::local_signer_fn(&private_key, chain.chain_id, provider)?
                }
                _ => eyre::bail!("Either --private-key or --signer-proxy with --from is required"),
            };
            let storage = SuperSignatureStorageOverride::new(address, backend.with_signer(signer));

            let opts = if dry_run {
                TransactOpts::default().no_send()
            } else {
                TransactOpts::default()
            };
            let sent = storage
                .transactor_session(opts)
                .store_signature_data(signature, account)
                .await?;

            info!(
                tx_hash = %sent.hash,
                sent = !dry_run,
                "Stored signature data"
            );
        }
        Command::GovernorStatus { hook } => {
            let address = deployment(chain, "governor", deployments.governor)?;
            let governor = SuperGovernor::new_caller(address, backend);

            let status = governor_status(&governor, call_opts, hook).await?;

            info!(
                hooks_root = %status.hooks_root,
                proposed_root = %status.proposed_root,
                proposed_root_effective_time = %status.proposed_root_effective_time,
                root_vetoed = status.root_vetoed,
                timelock = %status.timelock,
                revenue_share = %status.revenue_share,
                performance_fee_share = %status.performance_fee_share,
                "Governor status"
            );
            info!(hooks = ?status.registered_hooks, "Registered hooks");
            info!(
                hooks = ?status.fulfill_requests_hooks,
                "Registered fulfill-requests hooks"
            );
            if let Some(hook) = status.hook {
                info!(
                    hook = %hook.hook,
                    registered = hook.registered,
                    fulfill_requests = hook.fulfill_requests,
                    "Hook status"
                );
            }
        }
        Command::Events {
            contract,
            from_block,
            to_block,
        } => {
            let opts = FilterOpts {
                from_block: from_block.unwrap_or(deployments.start_block),
                to_block,
            };
            let started = Instant::now();

            let records = match contract {
                ContractKind::Executor => {
                    let address = deployment(chain, "executor", deployments.executor)?;
                    let executor = SuperDestinationExecutorSimulations::new_filterer(address, backend);
                    executor_events(&executor, &opts).await?
                }
                ContractKind::Governor => {
                    let address = deployment(chain, "governor", deployments.governor)?;
                    let governor = SuperGovernor::new_filterer(address, backend);
                    governor_events(&governor, &opts).await?
                }
            };

            Metrics::new().record_scan(contract, started.elapsed());
            for record in &records {
                info!(
                    event = record.event,
                    block = ?record.block_number,
                    tx_hash = ?record.transaction_hash,
                    details = %record.details,
                    "Event"
                );
            }
            info!(
                contract = %contract,
                count = records.len(),
                from_block = opts.from_block,
                "Scanned events"
            );
        }
        Command::Watch {
            contract,
            from_block,
            metrics_port,
        } => {
            if let Some(port) = metrics_port {
                install_prometheus_exporter(port)?;
                info!(port, "Prometheus exporter listening");
            }
            let metrics = Metrics::new();

            let opts = WatchOpts { start: from_block };
            let (records_tx, records_rx) = mpsc::channel(RECORD_CAPACITY);

            let watches = match contract {
                ContractKind::Executor => {
                    let address = deployment(chain, "executor", deployments.executor)?;
                    let executor = SuperDestinationExecutorSimulations::new_filterer(address, backend);
                    watch_executor(&executor, &opts, records_tx).await?
                }
                ContractKind::Governor => {
                    let address = deployment(chain, "governor", deployments.governor)?;
                    let governor = SuperGovernor::new_filterer(address, backend);
                    watch_governor(&governor, &opts, records_tx).await?
                }
            };

            let shutdown = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!(error = %e, "Failed to listen for Ctrl-C");
                    std::future::pending::<()>().await;
                }
            };
            let received = run_watches(watches, records_rx, &metrics, shutdown).await;

            info!(received, "Stopped watching");
        }
    }

    Ok(())
}

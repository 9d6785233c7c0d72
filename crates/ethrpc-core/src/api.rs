//! Registry of JSON-RPC method names understood by Geth 1.10.26.
//!
//! [`Client`](crate::client::Client) refuses to send anything not listed here.

/// Known RPC methods, in byte order so lookups can binary-search.
pub const COMMANDS: &[&str] = &[
    "account_ecRecover",
    "account_new",
    "account_signData",
    "account_signTransaction",
    "account_signTypedData",
    "admin_addPeer",
    "admin_addTrustedPeer",
    "admin_datadir",
    "admin_exportChain",
    "admin_importChain",
    "admin_nodeInfo",
    "admin_peerEvents",
    "admin_peers",
    "admin_removePeer",
    "admin_removeTrustedPeer",
    "admin_startHTTP",
    "admin_startWS",
    "admin_stopHTTP",
    "admin_stopWS",
    "clef_deriveAccount",
    "clef_listWallets",
    "clef_openWallet",
    "clique_discard",
    "clique_getSigner",
    "clique_getSigners",
    "clique_getSignersAtHash",
    "clique_getSnapshot",
    "clique_getSnapshotAtHash",
    "clique_proposals",
    "clique_propose",
    "clique_status",
    "db_getHex",
    "db_getString",
    "db_putHex",
    "db_putString",
    "debug_accountRange",
    "debug_backtraceAt",
    "debug_blockProfile",
    "debug_chaindbCompact",
    "debug_chaindbProperty",
    "debug_cpuProfile",
    "debug_dbAncient",
    "debug_dbAncients",
    "debug_dbGet",
    "debug_dumpBlock",
    "debug_freeOSMemory",
    "debug_freezeClient",
    "debug_gcStats",
    "debug_getAccessibleState",
    "debug_getBadBlocks",
    "debug_getBlockRlp",
    "debug_getHeaderRlp",
    "debug_getModifiedAccountsByHash",
    "debug_getModifiedAccountsByNumber",
    "debug_getRawBlock",
    "debug_getRawHeader",
    "debug_getRawReceipts",
    "debug_getRawTransaction",
    "debug_goTrace",
    "debug_intermediateRoots",
    "debug_memStats",
    "debug_mutexProfile",
    "debug_preimage",
    "debug_printBlock",
    "debug_seedHash",
    "debug_setBlockProfileRate",
    "debug_setGCPercent",
    "debug_setHead",
    "debug_setMutexProfileFraction",
    "debug_stacks",
    "debug_standardTraceBadBlockToFile",
    "debug_standardTraceBlockToFile",
    "debug_startCPUProfile",
    "debug_startGoTrace",
    "debug_stopCPUProfile",
    "debug_stopGoTrace",
    "debug_storageRangeAt",
    "debug_subscribe",
    "debug_traceBadBlock",
    "debug_traceBlock",
    "debug_traceBlockByHash",
    "debug_traceBlockByNumber",
    "debug_traceBlockFromFile",
    "debug_traceCall",
    "debug_traceChain",
    "debug_traceTransaction",
    "debug_verbosity",
    "debug_vmodule",
    "debug_writeBlockProfile",
    "debug_writeMemProfile",
    "debug_writeMutexProfile",
    "eth_accounts",
    "eth_blockNumber",
    "eth_call",
    "eth_chainId",
    "eth_compileLLL",
    "eth_compileSerpent",
    "eth_compileSolidity",
    "eth_createAccessList",
    "eth_estimateGas",
    "eth_feeHistory",
    "eth_gasPrice",
    "eth_getBalance",
    "eth_getBlockByHash",
    "eth_getBlockByNumber",
    "eth_getBlockTransactionCountByHash",
    "eth_getBlockTransactionCountByNumber",
    "eth_getCode",
    "eth_getCompilers",
    "eth_getFilterChanges",
    "eth_getFilterLogs",
    "eth_getLogs",
    "eth_getProof",
    "eth_getStorageAt",
    "eth_getTransactionByBlockHashAndIndex",
    "eth_getTransactionByBlockNumberAndIndex",
    "eth_getTransactionByHash",
    "eth_getTransactionCount",
    "eth_getTransactionReceipt",
    "eth_getUncleByBlockHashAndIndex",
    "eth_getUncleByBlockNumberAndIndex",
    "eth_getUncleCountByBlockHash",
    "eth_getUncleCountByBlockNumber",
    "eth_getWork",
    "eth_hashrate",
    "eth_maxPriorityFeePerGas",
    "eth_mining",
    "eth_newBlockFilter",
    "eth_newFilter",
    "eth_newPendingTransactionFilter",
    "eth_protocolVersion",
    "eth_sendRawTransaction",
    "eth_sendTransaction",
    "eth_sign",
    "eth_signTransaction",
    "eth_submitHashrate",
    "eth_submitWork",
    "eth_syncing",
    "eth_uninstallFilter",
    "eth_unsubscribe",
    "les_addBalance",
    "les_clientInfo",
    "les_getCheckpoint",
    "les_getCheckpointContractAddress",
    "les_latestCheckpoint",
    "les_priorityClientInfo",
    "les_serverInfo",
    "les_setClientParams",
    "les_setDefaultParams",
    "miner_getHashrate",
    "miner_setEtherbase",
    "miner_setExtra",
    "miner_setGasLimit",
    "miner_setGasPrice",
    "miner_setRecommitInterval",
    "miner_start",
    "miner_stop",
    "net_listening",
    "net_peerCount",
    "net_version",
    "personal_deriveAccount",
    "personal_ecRecover",
    "personal_importRawKey",
    "personal_initializeWallet",
    "personal_initializeWallets",
    "personal_listAccounts",
    "personal_listWallets",
    "personal_lockAccount",
    "personal_newAccount",
    "personal_openWallet",
    "personal_sendTransaction",
    "personal_sign",
    "personal_signTransaction",
    "personal_unlockAccount",
    "personal_unpair",
    "shh_addToGroup",
    "shh_getFilterChanges",
    "shh_getMessages",
    "shh_hasIdentity",
    "shh_newFilter",
    "shh_newGroup",
    "shh_newIdentity",
    "shh_post",
    "shh_uninstallFilter",
    "shh_version",
    "txpool_content",
    "txpool_contentFrom",
    "txpool_inspect",
    "txpool_status",
    "web3_clientVersion",
    "web3_sha3",
];

/// Returns `true` if `method` is a known RPC method name.
pub fn is_command(method: &str) -> bool {
    COMMANDS.binary_search_by(|probe| (*probe).cmp(method)).is_ok()
}

/// All known methods in one namespace, e.g. `"txpool"`.
pub fn namespace(prefix: &str) -> impl Iterator<Item = &'static str> + '_ {
    COMMANDS.iter().copied().filter(move |m| {
        m.split_once('_')
            .map(|(ns, _)| ns == prefix)
            .unwrap_or(false)
    })
}

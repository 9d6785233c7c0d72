//! EIP-155 chain identifiers for well-known networks.
//!
//! A chain id is a plain integer. The constants below are a convenience
//! table; any positive id can be handed to the signature codec directly.

/// An EIP-155 chain identifier.
pub type ChainId = u64;

// Mainnets
pub const ETHEREUM: ChainId = 1;
pub const EXPANSE: ChainId = 2;
pub const OPTIMISM: ChainId = 10;
pub const CLASSIC: ChainId = 61;
pub const POA_NET: ChainId = 99;
pub const XDAI: ChainId = 100;
pub const ARBITRUM: ChainId = 42161;

// Testnets
pub const MORDEN: ChainId = 2;
pub const ROPSTEN: ChainId = 3;
pub const RINKEBY: ChainId = 4;
pub const GOERLI: ChainId = 5;
pub const KOTTI: ChainId = 6;
pub const KOVAN: ChainId = 42;
pub const MORDEN_CLASSIC: ChainId = 62;
pub const MORDOR: ChainId = 63;
pub const KOVAN_OPTIMISM: ChainId = 69;
pub const XDAI_ARBITRUM: ChainId = 200;
pub const GOERLI_OPTIMISM: ChainId = 420;
pub const RINKEBY_ARBITRUM: ChainId = 421611;

// Private / development networks
pub const PRIVATE_GETH: ChainId = 1337;

/// Chain id assumed by the signature codec when the caller does not name one.
pub const DEFAULT_CHAIN_ID: ChainId = ETHEREUM;

/// Slug → chain id for every named constant, mainnets first.
///
/// Some ids are shared (Expanse and Morden both use 2); [`name_of`] returns
/// the first slug listed.
pub const KNOWN_CHAINS: &[(&str, ChainId)] = &[
    ("ethereum", ETHEREUM),
    ("expanse", EXPANSE),
    ("optimism", OPTIMISM),
    ("classic", CLASSIC),
    ("poa-net", POA_NET),
    ("xdai", XDAI),
    ("arbitrum", ARBITRUM),
    ("morden", MORDEN),
    ("ropsten", ROPSTEN),
    ("rinkeby", RINKEBY),
    ("goerli", GOERLI),
    ("kotti", KOTTI),
    ("kovan", KOVAN),
    ("morden-classic", MORDEN_CLASSIC),
    ("mordor", MORDOR),
    ("kovan-optimism", KOVAN_OPTIMISM),
    ("xdai-arbitrum", XDAI_ARBITRUM),
    ("goerli-optimism", GOERLI_OPTIMISM),
    ("rinkeby-arbitrum", RINKEBY_ARBITRUM),
    ("private-geth", PRIVATE_GETH),
];

/// Look up a chain id by slug. Matching ignores ASCII case and treats `_`
/// as `-`, so `"MORDEN_CLASSIC"` resolves like `"morden-classic"`.
pub fn by_name(slug: &str) -> Option<ChainId> {
    let normalized = slug.trim().to_ascii_lowercase().replace('_', "-");
    KNOWN_CHAINS
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, id)| *id)
}

/// The first registered slug for `chain_id`, if any.
pub fn name_of(chain_id: ChainId) -> Option<&'static str> {
    KNOWN_CHAINS
        .iter()
        .find(|(_, id)| *id == chain_id)
        .map(|(name, _)| *name)
}

//! Fixed chain identity for the single-node test chain.

/// Chain identifier used for application construction, the init-chain
/// request, and every execution context. Must match exactly in all three.
pub const CHAIN_ID: &str = "helix-777";

/// Bond denomination used by this harness for staking and default balances.
pub const DEFAULT_BOND_DENOM: &str = "inj";

/// Placeholder denomination hardcoded by several module defaults.
///
/// The genesis assembler patches every denomination-valued field holding
/// this string over to the configured bond denom before init.
pub const PLACEHOLDER_DENOM: &str = "stake";

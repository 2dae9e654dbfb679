//! End-to-end bootstrap scenarios.

use helix_app::modules::{GovParams, StakingParams, TokenfactoryParams};
use helix_testenv::{
    assemble_genesis, init_chain, new_helix_app, AppConfig, GenesisOptions, SetupError, TestEnv,
};
use helix_types::{AccountAddress, Coins, PublicKey, CHAIN_ID};

fn env() -> TestEnv {
    TestEnv::bootstrap(&AppConfig::default()).unwrap()
}

fn some_address(seed: u8) -> AccountAddress {
    AccountAddress::from_public_key(&PublicKey([seed; 32]))
}

#[test]
fn fund_then_query_balance() {
    let env = env();
    let target = some_address(42);
    env.fund_account(&target, &Coins::single(1_000_000, "inj"))
        .unwrap();
    assert_eq!(env.balance(&target, "inj").unwrap(), 1_000_000);
}

#[test]
fn funding_twice_doubles_the_balance() {
    let env = env();
    let target = some_address(42);
    let coins = Coins::single(250_000, "inj");
    env.fund_account(&target, &coins).unwrap();
    env.fund_account(&target, &coins).unwrap();
    assert_eq!(env.balance(&target, "inj").unwrap(), 500_000);
}

#[test]
fn funding_errors_are_surfaced_not_swallowed() {
    let env = env();
    let target = some_address(42);
    let bad = Coins::single(1, "");
    assert!(env.fund_account(&target, &bad).is_err());
    assert_eq!(env.balance(&target, "inj").unwrap(), 0);
}

#[test]
fn generated_account_is_prefunded() {
    let env = env();
    let (address, _) = env.funded_account();
    assert_eq!(
        env.balance(address, env.bond_denom()).unwrap(),
        100_000_000_000_000
    );
}

#[test]
fn validator_set_has_exactly_one_entry() {
    let env = env();
    let addresses = env.validator_addresses().unwrap();
    assert_eq!(addresses.len(), 1);
    assert!(addresses[0].starts_with(AccountAddress::OPERATOR_PREFIX));
}

#[test]
fn context_is_bound_to_the_fixed_chain() {
    let env = env();
    assert_eq!(env.ctx().height, 0);
    assert_eq!(env.ctx().chain_id, CHAIN_ID);
    assert_eq!(env.app().chain_id(), CHAIN_ID);
}

#[test]
fn gov_voting_period_reads_back_as_ten_seconds() {
    let mut env = env();
    env.register_param_type::<GovParams>("gov");
    let params: GovParams = env.params("gov").unwrap();
    assert_eq!(params.voting_period_secs, 10);
}

#[test]
fn custom_voting_period_override_is_honored() {
    let options = GenesisOptions {
        voting_period_secs: 30,
        ..GenesisOptions::default()
    };
    let mut env = TestEnv::bootstrap_with(&AppConfig::default(), options).unwrap();
    env.register_param_type::<GovParams>("gov");
    let params: GovParams = env.params("gov").unwrap();
    assert_eq!(params.voting_period_secs, 30);
}

#[test]
fn staking_bond_denom_is_patched_to_inj() {
    let mut env = env();
    env.register_param_type::<StakingParams>("staking");
    let params: StakingParams = env.params("staking").unwrap();
    assert_eq!(params.bond_denom, "inj");
}

#[test]
fn tokenfactory_params_are_registered_out_of_the_box() {
    let env = env();
    let params: TokenfactoryParams = env.params("tokenfactory").unwrap();
    assert_eq!(params.denom_creation_fee[0].denom, "inj");
}

#[test]
fn unregistered_param_type_is_an_error() {
    let env = env();
    let err = env.params::<GovParams>("gov").unwrap_err();
    assert!(matches!(err, SetupError::ParamsNotRegistered(_)));
}

#[test]
fn two_bootstraps_are_independent_with_fresh_keys() {
    let a = env();
    let b = env();

    let validators_a = a.validator_addresses().unwrap();
    let validators_b = b.validator_addresses().unwrap();
    assert_eq!(validators_a.len(), validators_b.len());
    assert_ne!(validators_a[0], validators_b[0]);

    let (addr_a, _) = a.funded_account();
    let (addr_b, _) = b.funded_account();
    assert_ne!(addr_a, addr_b);

    // Funding one environment leaves the other untouched.
    let target = some_address(7);
    a.fund_account(&target, &Coins::single(100, "inj")).unwrap();
    assert_eq!(b.balance(&target, "inj").unwrap(), 0);
}

#[test]
fn unknown_module_in_genesis_fails_initialization() {
    let app = new_helix_app(&AppConfig::default());
    let genesis = assemble_genesis(&app, &GenesisOptions::default()).unwrap();

    let mut doc: serde_json::Value = serde_json::from_slice(&genesis.state_bytes).unwrap();
    doc.as_object_mut()
        .unwrap()
        .insert("oracle".to_string(), serde_json::json!({}));
    let bytes = serde_json::to_vec_pretty(&doc).unwrap();

    let err = init_chain(&app, bytes).unwrap_err();
    assert!(matches!(
        err,
        SetupError::App(helix_app::AppError::UnknownModule(_))
    ));
}

#[test]
fn validator_private_key_matches_genesis_validator() {
    let env = env();
    let public = helix_testenv::keygen::public_from_private(env.validator_private_key());
    let expected = AccountAddress::operator_from_public_key(&public);
    let addresses = env.validator_addresses().unwrap();
    assert_eq!(addresses[0], expected.as_str());
}

#[test]
fn node_home_is_recorded_but_never_created() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("nonexistent");
    let env = TestEnv::bootstrap(&AppConfig::with_home(&missing)).unwrap();
    assert_eq!(env.node_home(), &missing);
    assert!(!missing.exists());
}

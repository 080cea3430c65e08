use multiversx_sc_scenario::imports::*;

use dao_plugin_common::token_descriptor::{FUNGIBLE, MINTABLE, VOTES, WRAPPED};
use governance_wrapped_token::governance_wrapped_token_proxy::GovernanceWrappedTokenProxy;
use token_mock::token_mock_proxy::TokenMockProxy;

const OWNER: TestAddress = TestAddress::new("owner");
const ALICE: TestAddress = TestAddress::new("alice");
const BOB: TestAddress = TestAddress::new("bob");

const UNDERLYING: TestSCAddress = TestSCAddress::new("underlying");
const WRAPPER: TestSCAddress = TestSCAddress::new("wrapper");

const WRAPPER_CODE: MxscPath = MxscPath::new("output/governance-wrapped-token.mxsc.json");
const TOKEN_MOCK_CODE: MxscPath =
    MxscPath::new("../mocks/token-mock/output/token-mock.mxsc.json");

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.set_current_dir_from_workspace("contracts/governance-wrapped-token");
    blockchain.register_contract(WRAPPER_CODE, governance_wrapped_token::ContractBuilder);
    blockchain.register_contract(TOKEN_MOCK_CODE, token_mock::ContractBuilder);
    blockchain
}

fn hex_of(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

fn units(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount)
}

/// Plain fungible underlying token with 100 units for Alice, and its wrapper.
fn setup() -> ScenarioWorld {
    let mut world = world();
    for account in [OWNER, ALICE, BOB] {
        world.account(account).nonce(1);
    }
    world.current_block().block_nonce(1);

    world
        .tx()
        .from(OWNER)
        .typed(TokenMockProxy)
        .init(
            FUNGIBLE,
            ManagedBuffer::from("Plain"),
            ManagedBuffer::from("PLN"),
        )
        .code(TOKEN_MOCK_CODE)
        .new_address(UNDERLYING)
        .run();
    world
        .tx()
        .from(OWNER)
        .to(UNDERLYING)
        .typed(TokenMockProxy)
        .mint(ALICE, units(100))
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(GovernanceWrappedTokenProxy)
        .init(
            UNDERLYING,
            ManagedBuffer::from("Wrapped Plain"),
            ManagedBuffer::from("wPLN"),
        )
        .code(WRAPPER_CODE)
        .new_address(WRAPPER)
        .run();

    world
}

fn check_underlying_balance(world: &mut ScenarioWorld, account: impl ProxyArg<ManagedAddress<StaticApi>>, expected: u64) {
    world
        .query()
        .to(UNDERLYING)
        .typed(TokenMockProxy)
        .balance_of(account)
        .returns(ExpectValue(units(expected)))
        .run();
}

fn check_wrapped_balance(world: &mut ScenarioWorld, account: TestAddress, expected: u64) {
    world
        .query()
        .to(WRAPPER)
        .typed(GovernanceWrappedTokenProxy)
        .balance_of(account)
        .returns(ExpectValue(units(expected)))
        .run();
}

fn deposit(world: &mut ScenarioWorld, from: TestAddress, account: TestAddress, amount: u64) {
    world
        .tx()
        .from(from)
        .to(UNDERLYING)
        .typed(TokenMockProxy)
        .approve(WRAPPER, units(amount))
        .run();
    world
        .tx()
        .from(from)
        .to(WRAPPER)
        .typed(GovernanceWrappedTokenProxy)
        .deposit_for(account, units(amount))
        .run();
}

#[test]
fn init_describes_a_wrapped_votes_token() {
    let mut world = setup();

    world
        .query()
        .to(WRAPPER)
        .typed(GovernanceWrappedTokenProxy)
        .underlying()
        .returns(ExpectValue(UNDERLYING))
        .run();
    world
        .query()
        .to(WRAPPER)
        .typed(GovernanceWrappedTokenProxy)
        .token_interfaces()
        .returns(ExpectValue(FUNGIBLE | VOTES | WRAPPED))
        .run();
    world
        .query()
        .to(WRAPPER)
        .typed(GovernanceWrappedTokenProxy)
        .supports_interface(MINTABLE)
        .returns(ExpectValue(false))
        .run();
}

#[test]
fn init_requires_a_contract_underlying() {
    let mut world = setup();
    let message = format!("Token is not a contract: {}", hex_of(&ALICE.eval_to_array()));

    world
        .tx()
        .from(OWNER)
        .typed(GovernanceWrappedTokenProxy)
        .init(
            ALICE,
            ManagedBuffer::from("Wrapped"),
            ManagedBuffer::from("W"),
        )
        .code(WRAPPER_CODE)
        .returns(ExpectError(4, message.as_str()))
        .run();
}

#[test]
fn deposit_mints_wrapped_voting_power() {
    let mut world = setup();

    deposit(&mut world, ALICE, BOB, 40);

    check_underlying_balance(&mut world, ALICE, 60);
    check_underlying_balance(&mut world, WRAPPER, 40);
    check_wrapped_balance(&mut world, ALICE, 0);
    check_wrapped_balance(&mut world, BOB, 40);

    world.current_block().block_nonce(2);
    world
        .query()
        .to(WRAPPER)
        .typed(GovernanceWrappedTokenProxy)
        .get_past_votes(BOB, 1u64)
        .returns(ExpectValue(units(40)))
        .run();
    world
        .query()
        .to(WRAPPER)
        .typed(GovernanceWrappedTokenProxy)
        .get_past_total_supply(1u64)
        .returns(ExpectValue(units(40)))
        .run();
}

#[test]
fn deposit_needs_an_allowance_and_a_positive_amount() {
    let mut world = setup();

    world
        .tx()
        .from(ALICE)
        .to(WRAPPER)
        .typed(GovernanceWrappedTokenProxy)
        .deposit_for(ALICE, units(0))
        .returns(ExpectError(4, "Amount must be positive"))
        .run();

    world
        .tx()
        .from(ALICE)
        .to(WRAPPER)
        .typed(GovernanceWrappedTokenProxy)
        .deposit_for(ALICE, units(10))
        .returns(ExpectError(4, "Insufficient allowance"))
        .run();

    check_underlying_balance(&mut world, ALICE, 100);
    check_wrapped_balance(&mut world, ALICE, 0);
}

#[test]
fn withdraw_returns_the_underlying() {
    let mut world = setup();
    deposit(&mut world, ALICE, ALICE, 50);

    world
        .tx()
        .from(ALICE)
        .to(WRAPPER)
        .typed(GovernanceWrappedTokenProxy)
        .withdraw_to(BOB, units(51))
        .returns(ExpectError(4, "Burn amount exceeds balance"))
        .run();

    world
        .tx()
        .from(ALICE)
        .to(WRAPPER)
        .typed(GovernanceWrappedTokenProxy)
        .withdraw_to(BOB, units(20))
        .run();

    check_wrapped_balance(&mut world, ALICE, 30);
    check_underlying_balance(&mut world, BOB, 20);
    check_underlying_balance(&mut world, WRAPPER, 30);
    world
        .query()
        .to(WRAPPER)
        .typed(GovernanceWrappedTokenProxy)
        .total_supply()
        .returns(ExpectValue(units(30)))
        .run();
}

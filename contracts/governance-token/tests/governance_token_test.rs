use multiversx_sc_scenario::imports::*;

use dao_mock::dao_mock_proxy;
use dao_plugin_common::{
    permissions::MINT_PERMISSION,
    token_descriptor::{FUNGIBLE, MINTABLE, VOTES, WRAPPED},
    types::MintSettings,
};
use governance_token::governance_token_proxy::GovernanceTokenProxy;

const OWNER: TestAddress = TestAddress::new("owner");
const ALICE: TestAddress = TestAddress::new("alice");
const BOB: TestAddress = TestAddress::new("bob");
const MINTER: TestAddress = TestAddress::new("minter");

const DAO: TestSCAddress = TestSCAddress::new("dao");
const TOKEN: TestSCAddress = TestSCAddress::new("token");

const TOKEN_CODE: MxscPath = MxscPath::new("output/governance-token.mxsc.json");
const DAO_MOCK_CODE: MxscPath = MxscPath::new("../mocks/dao-mock/output/dao-mock.mxsc.json");

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.set_current_dir_from_workspace("contracts/governance-token");
    blockchain.register_contract(TOKEN_CODE, governance_token::ContractBuilder);
    blockchain.register_contract(DAO_MOCK_CODE, dao_mock::ContractBuilder);
    blockchain
}

fn units(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount)
}

fn mint_settings(balances: &[(TestAddress, u64)]) -> MintSettings<StaticApi> {
    let mut settings = MintSettings::empty();
    for (account, amount) in balances {
        settings.receivers.push(account.to_managed_address());
        settings.amounts.push(units(*amount));
    }
    settings
}

fn setup(balances: &[(TestAddress, u64)]) -> ScenarioWorld {
    let mut world = world();
    for account in [OWNER, ALICE, BOB, MINTER] {
        world.account(account).nonce(1);
    }
    world.current_block().block_nonce(1);

    world
        .tx()
        .from(OWNER)
        .typed(dao_mock_proxy::DaoMockProxy)
        .init()
        .code(DAO_MOCK_CODE)
        .new_address(DAO)
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(GovernanceTokenProxy)
        .init(
            DAO,
            ManagedBuffer::from("Governance"),
            ManagedBuffer::from("GOV"),
            mint_settings(balances),
        )
        .code(TOKEN_CODE)
        .new_address(TOKEN)
        .run();

    world
}

fn check_balance(world: &mut ScenarioWorld, account: TestAddress, expected: u64) {
    world
        .query()
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .balance_of(account)
        .returns(ExpectValue(units(expected)))
        .run();
}

#[test]
fn init_mints_the_initial_distribution() {
    let mut world = setup(&[(ALICE, 70), (BOB, 30)]);

    check_balance(&mut world, ALICE, 70);
    check_balance(&mut world, BOB, 30);
    world
        .query()
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .total_supply()
        .returns(ExpectValue(units(100)))
        .run();
    world
        .query()
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .token_interfaces()
        .returns(ExpectValue(FUNGIBLE | VOTES | MINTABLE))
        .run();
    world
        .query()
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .supports_interface(FUNGIBLE | VOTES)
        .returns(ExpectValue(true))
        .run();
    world
        .query()
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .supports_interface(WRAPPED)
        .returns(ExpectValue(false))
        .run();
    world
        .query()
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .symbol()
        .returns(ExpectValue(ManagedBuffer::from("GOV")))
        .run();
}

#[test]
fn init_rejects_mismatched_mint_settings() {
    let mut world = setup(&[]);

    let mut settings = mint_settings(&[(ALICE, 1), (BOB, 2)]);
    settings.amounts = ManagedVec::new();
    settings.amounts.push(units(1));

    world
        .tx()
        .from(OWNER)
        .typed(GovernanceTokenProxy)
        .init(
            DAO,
            ManagedBuffer::from("Governance"),
            ManagedBuffer::from("GOV"),
            settings,
        )
        .code(TOKEN_CODE)
        .returns(ExpectError(
            4,
            "Mint settings array length mismatch: receivers 2, amounts 1",
        ))
        .run();
}

#[test]
fn mint_requires_dao_permission() {
    let mut world = setup(&[(ALICE, 10)]);

    world
        .tx()
        .from(MINTER)
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .mint(BOB, units(5))
        .returns(ExpectError(4, "DAO unauthorized"))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(DAO)
        .typed(dao_mock_proxy::DaoMockProxy)
        .grant(TOKEN, MINTER, ManagedBuffer::from(MINT_PERMISSION))
        .run();

    world
        .tx()
        .from(MINTER)
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .mint(BOB, units(5))
        .run();

    check_balance(&mut world, BOB, 5);
    world
        .query()
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .total_supply()
        .returns(ExpectValue(units(15)))
        .run();
}

#[test]
fn transfers_and_allowances() {
    let mut world = setup(&[(ALICE, 10)]);

    world
        .tx()
        .from(ALICE)
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .transfer(BOB, units(11))
        .returns(ExpectError(4, "Transfer amount exceeds balance"))
        .run();

    world
        .tx()
        .from(ALICE)
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .transfer(BOB, units(4))
        .run();
    check_balance(&mut world, ALICE, 6);
    check_balance(&mut world, BOB, 4);

    world
        .tx()
        .from(BOB)
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .transfer_from(ALICE, BOB, units(1))
        .returns(ExpectError(4, "Insufficient allowance"))
        .run();

    world
        .tx()
        .from(ALICE)
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .approve(BOB, units(3))
        .run();
    world
        .tx()
        .from(BOB)
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .transfer_from(ALICE, BOB, units(2))
        .run();

    world
        .query()
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .allowance(ALICE, BOB)
        .returns(ExpectValue(units(1)))
        .run();
    check_balance(&mut world, ALICE, 4);
    check_balance(&mut world, BOB, 6);
}

#[test]
fn past_votes_follow_block_checkpoints() {
    let mut world = setup(&[(ALICE, 10)]);

    world.current_block().block_nonce(5);
    world
        .tx()
        .from(ALICE)
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .transfer(BOB, units(3))
        .run();
    world
        .tx()
        .from(ALICE)
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .transfer(BOB, units(2))
        .run();
    world.current_block().block_nonce(8);

    let mut check_past = |account: TestAddress, block: u64, expected: u64| {
        world
            .query()
            .to(TOKEN)
            .typed(GovernanceTokenProxy)
            .get_past_votes(account, block)
            .returns(ExpectValue(units(expected)))
            .run();
    };
    check_past(ALICE, 0, 0);
    check_past(ALICE, 1, 10);
    check_past(ALICE, 4, 10);
    check_past(ALICE, 5, 5);
    check_past(ALICE, 7, 5);
    check_past(BOB, 4, 0);
    check_past(BOB, 5, 5);

    world
        .query()
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .get_past_total_supply(7u64)
        .returns(ExpectValue(units(10)))
        .run();
    world
        .query()
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .get_votes(BOB)
        .returns(ExpectValue(units(5)))
        .run();
}

#[test]
fn past_queries_need_a_mined_block() {
    let mut world = setup(&[(ALICE, 10)]);

    world
        .query()
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .get_past_total_supply(1u64)
        .returns(ExpectError(4, "Block not yet mined"))
        .run();
    world
        .query()
        .to(TOKEN)
        .typed(GovernanceTokenProxy)
        .get_past_votes(ALICE, 2u64)
        .returns(ExpectError(4, "Block not yet mined"))
        .run();
}

use multiversx_sc_scenario::imports::*;

use dao_mock::dao_mock_proxy;
use dao_plugin_common::{
    permissions::NTT_MINT_PERMISSION,
    token_descriptor::{FUNGIBLE, MEMBERSHIP, NON_TRANSFERABLE},
};
use nt_token::nt_token_proxy::NtTokenProxy;

const OWNER: TestAddress = TestAddress::new("owner");
const ALICE: TestAddress = TestAddress::new("alice");
const BOB: TestAddress = TestAddress::new("bob");
const CAROL: TestAddress = TestAddress::new("carol");

const DAO: TestSCAddress = TestSCAddress::new("dao");
const NT_TOKEN: TestSCAddress = TestSCAddress::new("nt-token");

const NT_TOKEN_CODE: MxscPath = MxscPath::new("output/nt-token.mxsc.json");
const DAO_MOCK_CODE: MxscPath = MxscPath::new("../mocks/dao-mock/output/dao-mock.mxsc.json");

const SOULBOUND_ERROR: &str =
    "This a Soulbound token. It cannot be transferred. It can only be burned by the token owner.";

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.set_current_dir_from_workspace("contracts/nt-token");
    blockchain.register_contract(NT_TOKEN_CODE, nt_token::ContractBuilder);
    blockchain.register_contract(DAO_MOCK_CODE, dao_mock::ContractBuilder);
    blockchain
}

/// The owner account holds `NTT_MINT_PERMISSION` on the token.
fn setup() -> ScenarioWorld {
    let mut world = world();
    for account in [OWNER, ALICE, BOB, CAROL] {
        world.account(account).nonce(1);
    }

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
        .typed(NtTokenProxy)
        .init(
            DAO,
            ManagedBuffer::from("Members"),
            ManagedBuffer::from("MBR"),
        )
        .code(NT_TOKEN_CODE)
        .new_address(NT_TOKEN)
        .run();

    world
        .tx()
        .from(OWNER)
        .to(DAO)
        .typed(dao_mock_proxy::DaoMockProxy)
        .grant(NT_TOKEN, OWNER, ManagedBuffer::from(NTT_MINT_PERMISSION))
        .run();

    world
}

fn mint(world: &mut ScenarioWorld, to: TestAddress) -> u64 {
    world
        .tx()
        .from(OWNER)
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .safe_mint(to)
        .returns(ReturnsResult)
        .run()
}

fn all_owners(world: &mut ScenarioWorld) -> Vec<ManagedAddress<StaticApi>> {
    world
        .query()
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .all_owners()
        .returns(ReturnsResult)
        .run()
        .into_iter()
        .collect()
}

#[test]
fn init_describes_a_soulbound_membership_token() {
    let mut world = setup();

    world
        .query()
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .token_interfaces()
        .returns(ExpectValue(MEMBERSHIP | NON_TRANSFERABLE))
        .run();
    world
        .query()
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .supports_interface(FUNGIBLE)
        .returns(ExpectValue(false))
        .run();
    world
        .query()
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .dao()
        .returns(ExpectValue(DAO))
        .run();
}

#[test]
fn safe_mint_assigns_sequential_ids() {
    let mut world = setup();

    assert_eq!(mint(&mut world, ALICE), 0);
    assert_eq!(mint(&mut world, BOB), 1);

    world
        .query()
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .owner_of(1u64)
        .returns(ExpectValue(BOB))
        .run();
    world
        .query()
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .token_of(ALICE)
        .returns(ExpectValue(0u64))
        .run();
    world
        .query()
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .balance_of(ALICE)
        .returns(ExpectValue(BigUint::<StaticApi>::from(1u64)))
        .run();
    world
        .query()
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .balance_of(CAROL)
        .returns(ExpectValue(BigUint::<StaticApi>::zero()))
        .run();
    world
        .query()
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .total_supply()
        .returns(ExpectValue(2u64))
        .run();
}

#[test]
fn safe_mint_requires_dao_permission() {
    let mut world = setup();

    world
        .tx()
        .from(ALICE)
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .safe_mint(ALICE)
        .returns(ExpectError(4, "DAO unauthorized"))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(DAO)
        .typed(dao_mock_proxy::DaoMockProxy)
        .revoke(NT_TOKEN, OWNER, ManagedBuffer::from(NTT_MINT_PERMISSION))
        .run();
    world
        .tx()
        .from(OWNER)
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .safe_mint(ALICE)
        .returns(ExpectError(4, "DAO unauthorized"))
        .run();
}

#[test]
fn recipient_cannot_own_multiple_tokens() {
    let mut world = setup();
    mint(&mut world, ALICE);

    world
        .tx()
        .from(OWNER)
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .safe_mint(ALICE)
        .returns(ExpectError(4, "Recipient cannot own multiple tokens."))
        .run();
}

#[test]
fn tokens_cannot_be_transferred() {
    let mut world = setup();
    mint(&mut world, ALICE);

    for caller in [ALICE, OWNER] {
        world
            .tx()
            .from(caller)
            .to(NT_TOKEN)
            .typed(NtTokenProxy)
            .transfer_from(ALICE, BOB, 0u64)
            .returns(ExpectError(4, SOULBOUND_ERROR))
            .run();
    }

    world
        .query()
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .owner_of(0u64)
        .returns(ExpectValue(ALICE))
        .run();
}

#[test]
fn only_the_holder_burns() {
    let mut world = setup();
    mint(&mut world, ALICE);
    mint(&mut world, BOB);
    mint(&mut world, CAROL);

    world
        .tx()
        .from(BOB)
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .burn(0u64)
        .returns(ExpectError(4, "Only the token owner can burn"))
        .run();

    world
        .tx()
        .from(ALICE)
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .burn(0u64)
        .run();

    world
        .query()
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .owner_of(0u64)
        .returns(ExpectError(4, "Token does not exist: 0"))
        .run();
    world
        .query()
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .token_of(ALICE)
        .returns(ExpectError(4, "Account owns no token"))
        .run();
    world
        .query()
        .to(NT_TOKEN)
        .typed(NtTokenProxy)
        .total_supply()
        .returns(ExpectValue(2u64))
        .run();

    let owners = all_owners(&mut world);
    assert_eq!(owners.len(), 2);
    assert!(owners.contains(&BOB.to_managed_address()));
    assert!(owners.contains(&CAROL.to_managed_address()));
    assert!(!owners.contains(&ALICE.to_managed_address()));

    // a burned token id is never handed out again
    assert_eq!(mint(&mut world, ALICE), 3);
}

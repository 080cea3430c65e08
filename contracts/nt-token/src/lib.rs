#![no_std]

multiversx_sc::imports!();

pub mod nt_token_proxy;

use dao_plugin_common::{
    dao_authorizable,
    permissions::NTT_MINT_PERMISSION,
    token_descriptor::{self, MEMBERSHIP, NON_TRANSFERABLE},
};

/// Soulbound membership token: at most one unit per holder, minted under
/// the DAO's `NTT_MINT_PERMISSION` and only ever removed by its holder.
#[multiversx_sc::contract]
pub trait NtToken:
    token_descriptor::TokenDescriptorModule + dao_authorizable::DaoAuthorizableModule
{
    #[init]
    fn init(&self, dao: ManagedAddress, name: ManagedBuffer, symbol: ManagedBuffer) {
        self.init_dao(dao);
        self.init_descriptor(MEMBERSHIP | NON_TRANSFERABLE, name, symbol);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINTS
    // ========================================================

    /// Returns the id of the minted token. Ids start at 0 and are never
    /// reused, even after a burn.
    #[endpoint(safeMint)]
    fn safe_mint(&self, to: ManagedAddress) -> u64 {
        self.require_dao_permission(NTT_MINT_PERMISSION);
        require!(!to.is_zero(), "Mint to the zero address");
        require!(
            !self.owners().contains(&to),
            "Recipient cannot own multiple tokens."
        );

        let token_id = self.next_token_id().get();
        self.next_token_id().set(token_id + 1);

        self.token_owner(token_id).set(&to);
        self.token_of(&to).set(token_id);
        self.owners().insert(to.clone());

        self.transfer_event(&ManagedAddress::zero(), &to, token_id);
        token_id
    }

    #[endpoint]
    fn burn(&self, token_id: u64) {
        let caller = self.blockchain().get_caller();
        let owner_mapper = self.token_owner(token_id);
        require!(
            !owner_mapper.is_empty() && owner_mapper.get() == caller,
            "Only the token owner can burn"
        );

        owner_mapper.clear();
        self.token_of(&caller).clear();
        self.owners().swap_remove(&caller);

        self.transfer_event(&caller, &ManagedAddress::zero(), token_id);
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, _from: ManagedAddress, _to: ManagedAddress, _token_id: u64) {
        sc_panic!(
            "This a Soulbound token. It cannot be transferred. It can only be burned by the token owner."
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(balanceOf)]
    fn balance_of(&self, account: &ManagedAddress) -> BigUint {
        if self.owners().contains(account) {
            BigUint::from(1u64)
        } else {
            BigUint::zero()
        }
    }

    #[view(ownerOf)]
    fn owner_of(&self, token_id: u64) -> ManagedAddress {
        let owner_mapper = self.token_owner(token_id);
        if owner_mapper.is_empty() {
            sc_panic!("Token does not exist: {}", token_id);
        }
        owner_mapper.get()
    }

    #[view(tokenOf)]
    fn get_token_of(&self, account: &ManagedAddress) -> u64 {
        require!(self.owners().contains(account), "Account owns no token");
        self.token_of(account).get()
    }

    #[view(totalSupply)]
    fn total_supply(&self) -> u64 {
        self.owners().len() as u64
    }

    #[view(allOwners)]
    fn all_owners(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for owner in self.owners().iter() {
            result.push(owner);
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        token_id: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("nextTokenId")]
    fn next_token_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("tokenOwner")]
    fn token_owner(&self, token_id: u64) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("tokenOf")]
    fn token_of(&self, account: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("owners")]
    fn owners(&self) -> UnorderedSetMapper<ManagedAddress>;
}

#![no_std]

multiversx_sc::imports!();

/// Stand-in for the voting power contract. Weights are set directly
/// instead of being derived from token balances and checkpoints.
#[multiversx_sc::contract]
pub trait WeightOracleMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ── Setup ──

    #[endpoint(setCurrentVotes)]
    fn set_current_votes(&self, account: ManagedAddress, weight: BigUint) {
        self.current_votes(&account).set(&weight);
    }

    #[endpoint(setPriorVotes)]
    fn set_prior_votes(&self, account: ManagedAddress, block_nonce: u64, weight: BigUint) {
        self.prior_votes(&account, block_nonce).set(&weight);
    }

    #[endpoint(setTotalSupplyAt)]
    fn set_total_supply_at(&self, block_nonce: u64, supply: BigUint) {
        self.total_supply_at(block_nonce).set(&supply);
    }

    // ── Oracle surface ──

    #[view(getCurrentVotes)]
    fn get_current_votes(&self, account: ManagedAddress) -> BigUint {
        self.current_votes(&account).get()
    }

    #[view(getPriorVotes)]
    fn get_prior_votes(&self, account: ManagedAddress, block_nonce: u64) -> BigUint {
        self.prior_votes(&account, block_nonce).get()
    }

    #[view(getTotalSupplyAt)]
    fn get_total_supply_at(&self, block_nonce: u64) -> BigUint {
        self.total_supply_at(block_nonce).get()
    }

    #[storage_mapper("currentVotes")]
    fn current_votes(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("priorVotes")]
    fn prior_votes(&self, account: &ManagedAddress, block_nonce: u64) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalSupplyAt")]
    fn total_supply_at(&self, block_nonce: u64) -> SingleValueMapper<BigUint>;
}

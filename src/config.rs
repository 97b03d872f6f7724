multiversx_sc::imports!();

/// Default time-to-live of an open proposal: 3 days in seconds
pub const DEFAULT_PROPOSAL_TTL: u64 = 259_200;

/// Upper bound on slot count, keeps the insert scan within a fixed gas budget
pub const MAX_CAPACITY: usize = 64;

/// Deploy-time configuration. Fixed for the lifetime of the contract.
#[multiversx_sc::module]
pub trait ConfigModule {
    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<ManagedAddress, usize, u64> {
        let oracle = self.weight_oracle_address().get();
        let capacity = self.capacity().get();
        let ttl = self.proposal_ttl().get();
        (oracle, capacity, ttl).into()
    }

    #[storage_mapper("weightOracleAddress")]
    fn weight_oracle_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("capacity")]
    fn capacity(&self) -> SingleValueMapper<usize>;

    #[storage_mapper("proposalTtl")]
    fn proposal_ttl(&self) -> SingleValueMapper<u64>;
}

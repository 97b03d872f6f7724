multiversx_sc::imports!();

use crate::types::Vote;

/// Per-slot vote bookkeeping. Records belong to the slot's current
/// occupant and are purged before the slot is reused.
#[multiversx_sc::module]
pub trait VoteLedgerModule {
    fn clear_slot(&self, slot: usize) {
        let voters = self.voters(slot);
        for voter in voters.iter() {
            self.votes(slot, &voter).clear();
        }
        self.voters(slot).clear();
    }

    /// Stores `vote` as the voter's only vote in the slot and hands back
    /// the one it replaces.
    fn record_vote(
        &self,
        slot: usize,
        voter: &ManagedAddress,
        vote: &Vote<Self::Api>,
    ) -> Option<Vote<Self::Api>> {
        let mapper = self.votes(slot, voter);
        let previous = if mapper.is_empty() {
            self.voters(slot).push(voter);
            None
        } else {
            Some(mapper.get())
        };

        mapper.set(vote);
        previous
    }

    #[storage_mapper("votes")]
    fn votes(&self, slot: usize, voter: &ManagedAddress) -> SingleValueMapper<Vote<Self::Api>>;

    #[storage_mapper("voters")]
    fn voters(&self, slot: usize) -> VecMapper<ManagedAddress>;
}

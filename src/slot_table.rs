multiversx_sc::imports!();

use crate::{
    config, events,
    types::{Fingerprint, Proposal, ProposalState},
};

/// Slot 0 never holds a proposal. An empty index entry reads as this value.
pub const NO_SLOT: usize = 0;

// ============================================================
// Slot table — fixed slots 1..=capacity, reused by scan
// ============================================================

#[multiversx_sc::module]
pub trait SlotTableModule: config::ConfigModule + events::EventsModule {
    /// First reusable slot in ascending order, or `NO_SLOT` if every slot
    /// holds a live proposal. Expired proposals met during the scan are
    /// discarded on the spot.
    fn find_insert_slot(&self, now: u64) -> usize {
        let capacity = self.capacity().get();

        for slot in 1..=capacity {
            if self.slots(slot).is_empty() {
                return slot;
            }

            let mut proposal = self.slots(slot).get();
            if proposal.state != ProposalState::Indefinite {
                return slot;
            }

            if self.is_expired(&proposal, now) {
                self.resolve_slot(slot, &mut proposal, ProposalState::Discarded);
                return slot;
            }
        }

        NO_SLOT
    }

    fn is_expired(&self, proposal: &Proposal<Self::Api>, now: u64) -> bool {
        let ttl = self.proposal_ttl().get();
        now >= proposal.created_at.saturating_add(ttl)
    }

    /// Moves an open proposal to its terminal state, frees its fingerprint
    /// and emits the outcome. The slot data stays until the slot is reused.
    fn resolve_slot(
        &self,
        slot: usize,
        proposal: &mut Proposal<Self::Api>,
        outcome: ProposalState,
    ) {
        require!(outcome.is_terminal(), "Proposal is not open");

        proposal.state = outcome;
        self.slots(slot).set(&*proposal);
        self.slot_index(&proposal.fingerprint).clear();

        match outcome {
            ProposalState::Accepted => self.proposal_accepted_event(&proposal.fingerprint),
            ProposalState::Rejected => self.proposal_rejected_event(&proposal.fingerprint),
            _ => self.proposal_discarded_event(&proposal.fingerprint),
        }
    }

    /// Slot currently mapped to an open proposal with this fingerprint.
    fn require_mapped_slot(&self, fingerprint: &Fingerprint<Self::Api>) -> usize {
        let slot = self.slot_index(fingerprint).get();
        require!(slot != NO_SLOT, "Proposal not found");
        slot
    }

    fn load_slot(&self, slot: usize) -> Proposal<Self::Api> {
        let mapper = self.slots(slot);
        if mapper.is_empty() {
            Proposal::uninitialized()
        } else {
            mapper.get()
        }
    }

    #[storage_mapper("slots")]
    fn slots(&self, slot: usize) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("slotIndex")]
    fn slot_index(&self, fingerprint: &Fingerprint<Self::Api>) -> SingleValueMapper<usize>;
}

#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod events;
pub mod governance_registry_proxy;
pub mod slot_table;
pub mod types;
pub mod vote_ledger;
pub mod weight_oracle_proxy;

use config::{DEFAULT_PROPOSAL_TTL, MAX_CAPACITY};
use slot_table::NO_SLOT;
use types::{Fingerprint, Proposal, ProposalState, Vote, VoteDirection};

// ============================================================
// Contract
// ============================================================

/// Bounded registry of open governance proposals. A proposal is known
/// only by its fingerprint; it resolves once either side holds half of
/// the total voting power recorded at its creation, or is discarded when
/// its TTL runs out.
#[multiversx_sc::contract]
pub trait GovernanceRegistry:
    config::ConfigModule
    + events::EventsModule
    + slot_table::SlotTableModule
    + vote_ledger::VoteLedgerModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        weight_oracle_address: ManagedAddress,
        capacity: usize,
        opt_proposal_ttl: OptionalValue<u64>,
    ) {
        require!(
            capacity > 0 && capacity <= MAX_CAPACITY,
            "Invalid capacity"
        );

        let proposal_ttl = match opt_proposal_ttl {
            OptionalValue::Some(ttl) => ttl,
            OptionalValue::None => DEFAULT_PROPOSAL_TTL,
        };
        require!(proposal_ttl > 0, "Invalid proposal TTL");

        self.weight_oracle_address().set(&weight_oracle_address);
        self.capacity().set(capacity);
        self.proposal_ttl().set(proposal_ttl);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProposal
    // Claims the lowest reusable slot for a fresh proposal.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self, fingerprint: Fingerprint<Self::Api>) -> usize {
        let mapped_slot = self.slot_index(&fingerprint).get();
        require!(
            mapped_slot == NO_SLOT
                || self.load_slot(mapped_slot).state != ProposalState::Indefinite,
            "Proposal already exists"
        );

        let now = self.blockchain().get_block_timestamp();
        let slot = self.find_insert_slot(now);
        require!(slot != NO_SLOT, "Registry is full");

        // ── Previous occupant's votes must not leak into the new tally ──
        self.clear_slot(slot);

        let creation_nonce = self.blockchain().get_block_nonce();
        let proposal = Proposal {
            fingerprint: fingerprint.clone(),
            state: ProposalState::Indefinite,
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
            created_at: now,
            creation_nonce,
        };

        self.slots(slot).set(&proposal);
        self.slot_index(&fingerprint).set(slot);

        self.proposal_created_event(&fingerprint, slot, creation_nonce);

        slot
    }

    // ========================================================
    // ENDPOINT: vote
    // Records or replaces the caller's vote, then checks the
    // threshold. An expired proposal is discarded instead.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, fingerprint: Fingerprint<Self::Api>, support: bool) -> ProposalState {
        let slot = self.require_mapped_slot(&fingerprint);
        let mut proposal = self.slots(slot).get();
        require!(
            proposal.state == ProposalState::Indefinite,
            "Proposal is not open"
        );

        // ── Expiration takes precedence over the vote ──
        let now = self.blockchain().get_block_timestamp();
        if self.is_expired(&proposal, now) {
            self.resolve_slot(slot, &mut proposal, ProposalState::Discarded);
            return ProposalState::Discarded;
        }

        let caller = self.blockchain().get_caller();
        let weight = self.current_weight(&caller);
        require!(weight > 0u64, "No voting power");

        // ── Power acquired after creation cannot swing an open vote ──
        let weight_at_creation = self.weight_at(&caller, proposal.creation_nonce);
        require!(
            weight <= weight_at_creation,
            "Voting power exceeds power at proposal creation"
        );

        let direction = VoteDirection::from_support(support);
        let vote = Vote {
            direction,
            amount: weight.clone(),
        };

        if let Some(previous) = self.record_vote(slot, &caller, &vote) {
            match previous.direction {
                VoteDirection::For => proposal.votes_for -= &previous.amount,
                VoteDirection::Against => proposal.votes_against -= &previous.amount,
            }
        }
        match direction {
            VoteDirection::For => proposal.votes_for += &weight,
            VoteDirection::Against => proposal.votes_against += &weight,
        }

        self.vote_event(&fingerprint, &caller, support, &weight);

        let threshold = self.total_weight_at(proposal.creation_nonce) / 2u64;
        if proposal.votes_for >= threshold {
            self.resolve_slot(slot, &mut proposal, ProposalState::Accepted);
        } else if proposal.votes_against >= threshold {
            self.resolve_slot(slot, &mut proposal, ProposalState::Rejected);
        } else {
            self.slots(slot).set(&proposal);
        }

        proposal.state
    }

    // ========================================================
    // ENDPOINT: discardExpired
    // Anyone can call to discard an open proposal past its TTL
    // without casting a vote.
    // ========================================================

    #[endpoint(discardExpired)]
    fn discard_expired(&self, fingerprint: Fingerprint<Self::Api>) {
        let slot = self.require_mapped_slot(&fingerprint);
        let mut proposal = self.slots(slot).get();
        require!(
            proposal.state == ProposalState::Indefinite,
            "Proposal is not open"
        );

        let now = self.blockchain().get_block_timestamp();
        require!(self.is_expired(&proposal, now), "Proposal has not expired");

        self.resolve_slot(slot, &mut proposal, ProposalState::Discarded);
    }

    // ========================================================
    // INTERNAL: weight oracle queries
    // The oracle endpoints are views, so a plain sync call
    // leaves its state untouched.
    // ========================================================

    fn current_weight(&self, account: &ManagedAddress) -> BigUint {
        let oracle = self.weight_oracle_address().get();
        self.tx()
            .to(&oracle)
            .typed(weight_oracle_proxy::WeightOracleProxy)
            .get_current_votes(account.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn weight_at(&self, account: &ManagedAddress, block_nonce: u64) -> BigUint {
        let oracle = self.weight_oracle_address().get();
        self.tx()
            .to(&oracle)
            .typed(weight_oracle_proxy::WeightOracleProxy)
            .get_prior_votes(account.clone(), block_nonce)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn total_weight_at(&self, block_nonce: u64) -> BigUint {
        let oracle = self.weight_oracle_address().get();
        self.tx()
            .to(&oracle)
            .typed(weight_oracle_proxy::WeightOracleProxy)
            .get_total_supply_at(block_nonce)
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // VIEWS — read-only queries
    // Snapshots do not reflect expirations that no call has
    // evaluated yet.
    // ========================================================

    #[view(getProposals)]
    fn get_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let capacity = self.capacity().get();
        for slot in 1..=capacity {
            if !self.slots(slot).is_empty() {
                result.push(self.slots(slot).get());
            }
        }
        result
    }

    #[view(getProposal)]
    fn get_proposal(&self, fingerprint: Fingerprint<Self::Api>) -> Proposal<Self::Api> {
        let slot = self.require_mapped_slot(&fingerprint);
        self.slots(slot).get()
    }

    #[view(getSlot)]
    fn get_slot(&self, slot: usize) -> Proposal<Self::Api> {
        require!(
            slot != NO_SLOT && slot <= self.capacity().get(),
            "Invalid slot index"
        );
        self.load_slot(slot)
    }

    /// Raw index lookup: the mapped slot, or 0 when the fingerprint has no
    /// open proposal. Never fails, unlike the fingerprint views below.
    #[view(peekSlotIndex)]
    fn peek_slot_index(&self, fingerprint: Fingerprint<Self::Api>) -> usize {
        self.slot_index(&fingerprint).get()
    }

    #[view(getVote)]
    fn get_vote(
        &self,
        fingerprint: Fingerprint<Self::Api>,
        voter: ManagedAddress,
    ) -> OptionalValue<Vote<Self::Api>> {
        let slot = self.require_mapped_slot(&fingerprint);
        let mapper = self.votes(slot, &voter);
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }

    #[view(getVoters)]
    fn get_voters(&self, fingerprint: Fingerprint<Self::Api>) -> MultiValueEncoded<ManagedAddress> {
        let slot = self.require_mapped_slot(&fingerprint);
        let mut result = MultiValueEncoded::new();
        for voter in self.voters(slot).iter() {
            result.push(voter);
        }
        result
    }
}

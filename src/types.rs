multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Byte length of a proposal fingerprint (a content hash).
pub const FINGERPRINT_LEN: usize = 32;

pub type Fingerprint<M> = ManagedByteArray<M, FINGERPRINT_LEN>;

// ============================================================
// Proposal State — slot lifecycle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalState {
    /// Slot has never held a proposal.
    Uninitialized,
    /// Open and accepting votes.
    Indefinite,
    /// Votes for reached half of the total supply at creation.
    Accepted,
    /// Votes against reached half of the total supply at creation.
    Rejected,
    /// TTL elapsed before either side reached the threshold.
    Discarded,
}

impl ProposalState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProposalState::Accepted | ProposalState::Rejected | ProposalState::Discarded
        )
    }
}

// ============================================================
// Proposal — one slot's occupant
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub fingerprint: Fingerprint<M>,
    pub state: ProposalState,
    pub votes_for: BigUint<M>,
    pub votes_against: BigUint<M>,
    /// Block timestamp at creation, the start of the TTL window
    pub created_at: u64,
    /// Block nonce at creation. All historical weight lookups use it.
    pub creation_nonce: u64,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn uninitialized() -> Self {
        Proposal {
            fingerprint: ManagedByteArray::new_from_bytes(&[0u8; FINGERPRINT_LEN]),
            state: ProposalState::Uninitialized,
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
            created_at: 0,
            creation_nonce: 0,
        }
    }
}

// ============================================================
// Vote — a participant's last recorded vote in a slot
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteDirection {
    For,
    Against,
}

impl VoteDirection {
    pub fn from_support(support: bool) -> Self {
        if support {
            VoteDirection::For
        } else {
            VoteDirection::Against
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Vote<M: ManagedTypeApi> {
    pub direction: VoteDirection,
    pub amount: BigUint<M>,
}

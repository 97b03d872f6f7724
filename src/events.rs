multiversx_sc::imports!();

use crate::types::Fingerprint;

/// Log surface of the registry. Only the three outcome events signal a
/// state transition; `proposalCreated` and `vote` are informational and
/// never imply that a proposal was resolved.
#[multiversx_sc::module]
pub trait EventsModule {
    // ── Outcomes: exactly one per resolved proposal ──

    #[event("proposalAccepted")]
    fn proposal_accepted_event(&self, #[indexed] fingerprint: &Fingerprint<Self::Api>);

    #[event("proposalRejected")]
    fn proposal_rejected_event(&self, #[indexed] fingerprint: &Fingerprint<Self::Api>);

    #[event("proposalDiscarded")]
    fn proposal_discarded_event(&self, #[indexed] fingerprint: &Fingerprint<Self::Api>);

    // ── Activity ──

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] fingerprint: &Fingerprint<Self::Api>,
        #[indexed] slot: usize,
        creation_nonce: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] fingerprint: &Fingerprint<Self::Api>,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );
}

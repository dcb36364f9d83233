use proptest::prelude::*;

use adac_types::{Address, ProposalId, Timestamp, TokenAmount};

proptest! {
    /// TokenAmount roundtrip: new -> raw produces the same value.
    #[test]
    fn token_amount_roundtrip(raw in any::<u128>()) {
        let amount = TokenAmount::new(raw);
        prop_assert_eq!(amount.raw(), raw);
    }

    /// TokenAmount::is_zero is true only for zero.
    #[test]
    fn token_amount_is_zero_correct(raw in any::<u128>()) {
        prop_assert_eq!(TokenAmount::new(raw).is_zero(), raw == 0);
    }

    /// checked_add agrees with u128 checked arithmetic.
    #[test]
    fn token_amount_checked_add(a in any::<u128>(), b in any::<u128>()) {
        let sum = TokenAmount::new(a).checked_add(TokenAmount::new(b));
        prop_assert_eq!(sum.map(|s| s.raw()), a.checked_add(b));
    }

    /// saturating_add never decreases either operand.
    #[test]
    fn token_amount_saturating_add_monotone(a in any::<u128>(), b in any::<u128>()) {
        let sum = TokenAmount::new(a).saturating_add(TokenAmount::new(b));
        prop_assert!(sum >= TokenAmount::new(a));
        prop_assert!(sum >= TokenAmount::new(b));
    }

    /// TokenAmount ordering follows raw ordering.
    #[test]
    fn token_amount_ordering(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(TokenAmount::new(a) <= TokenAmount::new(b), a <= b);
    }

    /// TokenAmount JSON serialization roundtrip.
    #[test]
    fn token_amount_json_roundtrip(raw in any::<u128>()) {
        let amount = TokenAmount::new(raw);
        let encoded = serde_json::to_string(&amount).unwrap();
        let decoded: TokenAmount = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, amount);
    }

    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in any::<u64>(), b in any::<u64>()) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// plus_secs adds within non-saturating bounds.
    #[test]
    fn timestamp_plus_secs_adds(base in 0u64..1_000_000, secs in 0u64..1_000_000) {
        prop_assert_eq!(Timestamp::new(base).plus_secs(secs).as_secs(), base + secs);
    }

    /// ProposalId roundtrip and ordering.
    #[test]
    fn proposal_id_roundtrip(id in any::<u64>()) {
        let pid = ProposalId::new(id);
        prop_assert_eq!(pid.value(), id);
        prop_assert_eq!(pid.to_string(), id.to_string());
    }

    /// Address roundtrip: non-empty strings are valid, display matches.
    #[test]
    fn address_roundtrip(s in "[a-zA-Z0-9_]{1,40}") {
        let addr = Address::new(s.clone());
        prop_assert!(addr.is_valid());
        prop_assert_eq!(addr.as_str(), s.as_str());
    }

    /// Address JSON roundtrip.
    #[test]
    fn address_json_roundtrip(s in "[a-zA-Z0-9_]{0,40}") {
        let addr = Address::new(s);
        let encoded = serde_json::to_string(&addr).unwrap();
        let decoded: Address = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, addr);
    }
}

#[test]
fn timestamp_plus_secs_saturates() {
    assert_eq!(
        Timestamp::new(u64::MAX).plus_secs(1),
        Timestamp::new(u64::MAX)
    );
}

//! Kani proof harnesses for critical invariants
//!
//! These harnesses provide bounded model checking proofs for the counter
//! arithmetic and divisor semantics the evaluation loop depends on.
//!
//! Run with: `cargo kani --harness <name>`
//! Run all:  `cargo kani`
//!
//! Prerequisites: `cargo install --locked kani-verifier && cargo kani setup`

#[cfg(kani)]
mod proofs {
    /// Proof: the rating counter survives a withhold/restore round trip
    ///
    /// Withholding an item subtracts its vector length from the store's
    /// rating counter; restoring adds it back. The counter must neither
    /// underflow nor drift.
    #[kani::proof]
    fn proof_rating_counter_round_trip() {
        let n_ratings: usize = kani::any();
        let withheld_len: usize = kani::any();

        // The withheld vector's ratings are part of the store's total.
        kani::assume(n_ratings <= 1_000_000);
        kani::assume(withheld_len <= n_ratings);

        let during = n_ratings - withheld_len;
        let after = during + withheld_len;

        kani::assert(during <= n_ratings, "Counter must not grow on withhold");
        kani::assert(after == n_ratings, "Round trip must restore the counter");
    }

    /// Proof: restoring over an existing item keeps the counter consistent
    ///
    /// Restore replaces any vector already under the id: the counter drops
    /// by the old length and grows by the new one, with no underflow.
    #[kani::proof]
    fn proof_restore_replacement_counter() {
        let n_ratings: usize = kani::any();
        let old_len: usize = kani::any();
        let new_len: usize = kani::any();

        kani::assume(n_ratings <= 1_000_000);
        kani::assume(old_len <= n_ratings);
        kani::assume(new_len <= 1_000_000);

        let after = n_ratings - old_len + new_len;

        kani::assert(
            after + old_len == n_ratings + new_len,
            "Replacement must conserve ratings",
        );
        kani::assert(
            new_len != old_len || after == n_ratings,
            "Equal-length replacement must leave the counter unchanged",
        );
    }

    /// Proof: the nominal divisor bounds the aggregate error
    ///
    /// Per-item errors are bounded by the score ceiling, items that score
    /// nothing contribute zero, and the sum is divided by the full sample
    /// size. Modeled in tenths to stay in integer arithmetic.
    #[kani::proof]
    fn proof_nominal_divisor_bounds() {
        const CEILING_TENTHS: u64 = 50; // score ceiling 5.0

        let sample_size: u64 = kani::any();
        let scored_items: u64 = kani::any();

        kani::assume(sample_size > 0 && sample_size <= 1_000);
        kani::assume(scored_items <= sample_size);

        // Worst case: every scored item at the ceiling.
        let max_sum = scored_items * CEILING_TENTHS;
        let average_tenths = max_sum / sample_size;

        kani::assert(
            average_tenths <= CEILING_TENTHS,
            "Aggregate must not exceed the per-item ceiling",
        );
        kani::assert(
            scored_items != 0 || average_tenths == 0,
            "A sample with nothing scored must aggregate to zero",
        );
    }

    /// Proof: with-replacement draw indices stay inside the pool
    ///
    /// Every draw reduces an arbitrary RNG output modulo the pool length;
    /// the resulting index must always be a valid pool position.
    #[kani::proof]
    fn proof_sample_index_bounds() {
        let pool_len: usize = kani::any();
        let raw: usize = kani::any();

        kani::assume(pool_len > 0 && pool_len <= 100_000);

        let idx = raw % pool_len;

        kani::assert(idx < pool_len, "Drawn index must be inside the pool");
    }
}

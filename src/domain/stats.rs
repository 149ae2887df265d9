//! Dashboard aggregates derived from the fetched seller and transaction lists.

use std::collections::BTreeMap;

use super::{Seller, Transaction};

/// Headline numbers shown in the dashboard stats cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub seller_count: usize,
    /// `paid` plus `session_created` transactions.
    pub active_tx: usize,
    /// Sum of `price_wei` over all transactions.
    pub total_volume: u128,
    /// `total_volume / transaction count`, zero when there are none.
    pub avg_price: u128,
}

impl DashboardStats {
    #[must_use]
    pub fn compute(sellers: &[Seller], transactions: &[Transaction]) -> Self {
        let total_volume: u128 = transactions.iter().map(|t| t.price_wei).sum();
        let avg_price = u128::try_from(transactions.len())
            .ok()
            .filter(|n| *n > 0)
            .map_or(0, |n| total_volume / n);

        Self {
            seller_count: sellers.len(),
            active_tx: transactions
                .iter()
                .filter(|t| t.status.is_successful())
                .count(),
            total_volume,
            avg_price,
        }
    }
}

/// Transaction count per status string, in order of first appearance.
#[must_use]
pub fn status_distribution(transactions: &[Transaction]) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    for txn in transactions {
        let status = txn.status.as_str();
        match counts.iter_mut().find(|(name, _)| name == status) {
            Some((_, count)) => *count += 1,
            None => counts.push((status.to_string(), 1)),
        }
    }
    counts
}

/// Summed volume per creation date, ascending, keeping the last `days` dates.
///
/// Transactions without a usable date are skipped.
#[must_use]
pub fn daily_volume(transactions: &[Transaction], days: usize) -> Vec<(String, u128)> {
    let mut by_date: BTreeMap<&str, u128> = BTreeMap::new();
    for txn in transactions {
        if let Some(date) = txn.created_date() {
            *by_date.entry(date).or_default() += txn.price_wei;
        }
    }
    let skip = by_date.len().saturating_sub(days);
    by_date
        .into_iter()
        .skip(skip)
        .map(|(date, volume)| (date.to_string(), volume))
        .collect()
}

/// Seller price histogram bucket, on the CFX scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceBucket {
    Zero,
    BelowMilli,
    MilliToCenti,
    CentiToDeci,
    DeciAndAbove,
}

impl PriceBucket {
    pub const ALL: [Self; 5] = [
        Self::Zero,
        Self::BelowMilli,
        Self::MilliToCenti,
        Self::CentiToDeci,
        Self::DeciAndAbove,
    ];

    /// Buckets a base-unit price read as wei.
    #[must_use]
    pub const fn of(price: u128) -> Self {
        const MILLI: u128 = 1_000_000_000_000_000;
        if price == 0 {
            Self::Zero
        } else if price < MILLI {
            Self::BelowMilli
        } else if price < MILLI * 10 {
            Self::MilliToCenti
        } else if price < MILLI * 100 {
            Self::CentiToDeci
        } else {
            Self::DeciAndAbove
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::BelowMilli => "<0.001",
            Self::MilliToCenti => "0.001-0.01",
            Self::CentiToDeci => "0.01-0.1",
            Self::DeciAndAbove => "≥0.1",
        }
    }
}

/// Seller count per price bucket, all five buckets in fixed order.
#[must_use]
pub fn price_buckets(sellers: &[Seller]) -> Vec<(PriceBucket, u64)> {
    let mut counts = [0_u64; 5];
    for seller in sellers {
        counts[PriceBucket::of(seller.bucket_price()) as usize] += 1;
    }
    PriceBucket::ALL.into_iter().zip(counts).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TxStatus;
    use crate::test_utils::{SellerMother, TransactionMother};
    use rstest::rstest;

    #[test]
    fn test_stats_with_no_transactions_are_zero() {
        let sellers = vec![SellerMother::active("a"), SellerMother::active("b")];
        let stats = DashboardStats::compute(&sellers, &[]);
        assert_eq!(
            stats,
            DashboardStats {
                seller_count: 2,
                active_tx: 0,
                total_volume: 0,
                avg_price: 0,
            }
        );
    }

    #[test]
    fn test_stats_counts_paid_and_session_created() {
        let txns = vec![
            TransactionMother::with_status("1", TxStatus::Paid, 3),
            TransactionMother::with_status("2", TxStatus::SessionCreated, 3),
            TransactionMother::with_status("3", TxStatus::Pending, 3),
            TransactionMother::with_status("4", TxStatus::Failed, 1),
        ];
        let stats = DashboardStats::compute(&[], &txns);
        assert_eq!(stats.active_tx, 2);
        assert_eq!(stats.total_volume, 10);
        assert_eq!(stats.avg_price, 2);
    }

    #[test]
    fn test_status_distribution_keeps_first_appearance_order() {
        let txns = vec![
            TransactionMother::with_status("1", TxStatus::Pending, 0),
            TransactionMother::with_status("2", TxStatus::Paid, 0),
            TransactionMother::with_status("3", TxStatus::Pending, 0),
            TransactionMother::with_status("4", TxStatus::Other("odd".into()), 0),
        ];
        assert_eq!(
            status_distribution(&txns),
            vec![
                ("pending".to_string(), 2),
                ("paid".to_string(), 1),
                ("odd".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_daily_volume_sorts_and_keeps_last_days() {
        let mut txns: Vec<Transaction> = (1..=20)
            .map(|day| {
                let mut t = TransactionMother::with_status(&day.to_string(), TxStatus::Paid, 5);
                t.created_at = format!("2024-01-{day:02}T10:00:00Z");
                t
            })
            .collect();
        txns.push(Transaction {
            created_at: "2024-01-20T23:00:00Z".into(),
            price_wei: 7,
            ..TransactionMother::basic("x", "s", "b")
        });
        txns.push(Transaction {
            created_at: String::new(),
            ..TransactionMother::basic("y", "s", "b")
        });

        let volume = daily_volume(&txns, 14);
        assert_eq!(volume.len(), 14);
        assert_eq!(volume[0].0, "2024-01-07");
        assert_eq!(volume.last(), Some(&("2024-01-20".to_string(), 12)));
    }

    #[rstest]
    #[case::zero(0, PriceBucket::Zero)]
    #[case::tiny(1, PriceBucket::BelowMilli)]
    #[case::milli(1_000_000_000_000_000, PriceBucket::MilliToCenti)]
    #[case::centi(10_000_000_000_000_000, PriceBucket::CentiToDeci)]
    #[case::deci(100_000_000_000_000_000, PriceBucket::DeciAndAbove)]
    #[case::whole(5_000_000_000_000_000_000, PriceBucket::DeciAndAbove)]
    fn test_price_bucket_boundaries(#[case] price: u128, #[case] expected: PriceBucket) {
        assert_eq!(PriceBucket::of(price), expected);
    }

    #[test]
    fn test_price_buckets_use_conflux_then_legacy_then_tron() {
        let sellers = vec![
            SellerMother::with_prices("a", None, Some(2_000_000_000_000_000), Some(0)),
            SellerMother::with_prices("b", Some(0), None, None),
            SellerMother::with_prices("c", None, None, Some(1_000_000)),
            SellerMother::with_prices("d", None, None, None),
        ];
        let buckets = price_buckets(&sellers);
        let labels: Vec<_> = buckets.iter().map(|(b, n)| (b.label(), *n)).collect();
        assert_eq!(
            labels,
            vec![
                ("0", 2),
                ("<0.001", 1),
                ("0.001-0.01", 1),
                ("0.01-0.1", 0),
                ("≥0.1", 0),
            ]
        );
    }
}

//! Topology layout.
//!
//! Sellers are spread on a golden-angle spiral. Placement is keyed on a salted
//! FNV-1a hash of the seller id, so the same input always produces the same
//! picture and adding one seller only nudges the others.

use std::collections::{BTreeMap, HashMap};
use std::f64::consts::PI;

use super::types::{Topology, TopologyEdge, TopologyNode};
use crate::constants::{
    BASE_RADIUS, CANVAS_CENTER_X, CANVAS_CENTER_Y, LAYOUT_SALT, MAX_RADIUS, RADIUS_JITTER,
    RADIUS_SPREAD,
};
use crate::domain::{Seller, Transaction};

/// π(3 − √5), about 137.5°.
pub(crate) fn golden_angle() -> f64 {
    PI * (3.0 - 5.0_f64.sqrt())
}

/// 32-bit FNV-1a.
#[must_use]
pub fn fnv1a(input: &str) -> u32 {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;
    input.bytes().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(PRIME)
    })
}

/// Maps a hash to `[0, 1)`.
fn unit(hash: u32) -> f64 {
    f64::from(hash) / (f64::from(u32::MAX) + 1.0)
}

#[derive(Debug, Default, Clone, Copy)]
struct Counts {
    in_count: u32,
    out_count: u32,
    degree: u32,
}

impl Topology {
    /// Lays out `sellers` and aggregates `transactions` into weighted edges.
    #[must_use]
    pub fn build(sellers: &[Seller], transactions: &[Transaction]) -> Self {
        // One node per id, active if any copy is active.
        let mut unique: BTreeMap<&str, bool> = BTreeMap::new();
        for seller in sellers {
            let active = unique.entry(seller.seller_id.as_str()).or_default();
            *active |= seller.is_active();
        }
        if unique.is_empty() {
            return Self::default();
        }

        let mut ranked: Vec<(&str, bool)> = unique.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        let rank: HashMap<&str, usize> = ranked
            .iter()
            .enumerate()
            .map(|(i, (id, _))| (*id, i))
            .collect();

        let by_address = address_index(sellers, &rank);

        let mut counts: HashMap<&str, Counts> = HashMap::new();
        let mut edges: BTreeMap<(&str, &str), u32> = BTreeMap::new();
        for txn in transactions {
            let seller = rank
                .get_key_value(txn.seller_id.as_str())
                .map(|(id, _)| *id);
            let buyer = resolve_buyer(&txn.buyer_address, &rank, &by_address);
            if buyer.is_some() && buyer == seller {
                continue;
            }

            if let Some(seller) = seller {
                counts.entry(seller).or_default().in_count += 1;
            }
            if let Some(buyer) = buyer {
                counts.entry(buyer).or_default().out_count += 1;
            }
            if let (Some(s), Some(b)) = (seller, buyer) {
                let key = if s < b { (s, b) } else { (b, s) };
                *edges.entry(key).or_default() += 1;
            }
        }
        for (&(a, b), &weight) in &edges {
            counts.entry(a).or_default().degree += weight;
            counts.entry(b).or_default().degree += weight;
        }

        let n = ranked.len() as f64;
        let golden = golden_angle();

        let mut placement: Vec<(u32, &str, bool)> = ranked
            .iter()
            .map(|(id, active)| (fnv1a(&format!("{LAYOUT_SALT}:{id}")), *id, *active))
            .collect();
        placement.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));

        let nodes = placement
            .into_iter()
            .enumerate()
            .map(|(index, (hash, id, active))| {
                let offset = unit(hash) * golden / 4.0;
                let angle = index as f64 * golden + offset;

                let node_rank = rank.get(id).copied().unwrap_or(index) as f64;
                let jitter = unit(fnv1a(&format!("{LAYOUT_SALT}:radius:{id}"))) * RADIUS_JITTER;
                let radius = (BASE_RADIUS + RADIUS_SPREAD * ((node_rank + 1.0) / n).sqrt() + jitter)
                    .min(MAX_RADIUS);

                let c = counts.get(id).copied().unwrap_or_default();
                TopologyNode {
                    id: id.to_string(),
                    x: CANVAS_CENTER_X + radius * angle.cos(),
                    y: CANVAS_CENTER_Y + radius * angle.sin(),
                    angle,
                    radius,
                    degree: c.degree,
                    active,
                    in_count: c.in_count,
                    out_count: c.out_count,
                    total_count: c.in_count + c.out_count,
                }
            })
            .collect();

        let edges = edges
            .into_iter()
            .map(|((a, b), weight)| TopologyEdge {
                a: a.to_string(),
                b: b.to_string(),
                weight,
            })
            .collect();

        Self { nodes, edges }
    }
}

/// A buyer is a seller when the address is a seller id or one of their EVM addresses.
fn resolve_buyer<'a>(
    buyer: &str,
    rank: &HashMap<&'a str, usize>,
    by_address: &HashMap<String, &'a str>,
) -> Option<&'a str> {
    if let Some((id, _)) = rank.get_key_value(buyer) {
        return Some(*id);
    }
    by_address.get(&buyer.trim().to_lowercase()).copied()
}

/// Lower-cased EVM address to seller id. The best-ranked seller wins a shared address.
fn address_index<'a>(
    sellers: &'a [Seller],
    rank: &HashMap<&'a str, usize>,
) -> HashMap<String, &'a str> {
    let mut index: HashMap<String, &'a str> = HashMap::new();
    for seller in sellers {
        let address = seller.evm_address.trim().to_lowercase();
        if address.is_empty() {
            continue;
        }
        let id = seller.seller_id.as_str();
        index
            .entry(address)
            .and_modify(|current| {
                if rank.get(id) < rank.get(*current) {
                    *current = id;
                }
            })
            .or_insert(id);
    }
    index
}

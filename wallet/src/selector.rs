//! The cell-selection policy for plain transfers.

use ckb_wallet_types::capacity::Capacity;
use ckb_wallet_types::core::LiveCell;
use log::{debug, trace};

use crate::error::Error;

/// Whether a transfer may consume this cell.
///
/// A cell with a type script or a data payload encodes semantics beyond bare
/// capacity; interpreting those is not this engine's job, so such cells are
/// never spent here.
fn is_plain_capacity(cell: &LiveCell) -> bool {
    cell.type_().is_none() && cell.data.is_empty()
}

/// Selects cells covering `required`, largest-first.
///
/// Largest-first keeps the input count — and therefore the serialized size —
/// minimal for a given target. Ties are broken by out-point so an identical
/// snapshot always yields an identical selection. Returns the chosen cells
/// and their exact capacity sum.
pub fn select_live_cells(
    cells: &[LiveCell],
    required: Capacity,
) -> Result<(Vec<LiveCell>, Capacity), Error> {
    let mut candidates: Vec<&LiveCell> = cells
        .iter()
        .filter(|cell| {
            let spendable = is_plain_capacity(cell);
            if !spendable {
                trace!(
                    "skipping non-plain-capacity cell {:?}#{}",
                    cell.out_point.tx_hash,
                    cell.out_point.index
                );
            }
            spendable
        })
        .collect();
    if candidates.is_empty() {
        return Err(Error::NoSpendableCells);
    }
    candidates.sort_by(|a, b| {
        b.capacity()
            .cmp(&a.capacity())
            .then_with(|| a.out_point.cmp(&b.out_point))
    });

    let mut selected = Vec::new();
    let mut total = Capacity::zero();
    for cell in candidates {
        total = total.safe_add(cell.capacity())?;
        selected.push(cell.clone());
        if total >= required {
            debug!(
                "selected {} inputs totalling {} shannons for a {}-shannon target",
                selected.len(),
                total,
                required
            );
            return Ok((selected, total));
        }
    }
    Err(Error::InsufficientBalance {
        required,
        available: total,
    })
}

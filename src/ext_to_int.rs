use crate::case::DcCase;
use crate::error::{DcError, Result};
use crate::order::{DcOrder, State};
use log::debug;
use std::collections::{BTreeSet, HashMap};

fn e2i(map: &HashMap<usize, usize>, table: &'static str, row: usize, bus: usize) -> Result<usize> {
    map.get(&bus)
        .copied()
        .ok_or(DcError::UnresolvedBus { table, row, bus })
}

/// Converts external DC bus numbers to consecutive internal bus numbers
/// starting at 1.
///
/// Buses are sorted by DC grid and, within a grid, buses with an AC
/// connection come first. The sort is stable. Bus references of branches and
/// converters are rewritten. On error `case` is left unchanged.
pub fn ext_to_int_dc(case: &mut DcCase) -> Result<DcOrder> {
    let nb = case.bus.len();

    // DC grids must be numbered without gaps.
    let grids: Vec<usize> = case
        .bus
        .iter()
        .map(|b| b.grid)
        .collect::<BTreeSet<usize>>()
        .into_iter()
        .collect();
    if grids.windows(2).any(|w| w[1] - w[0] > 1) {
        return Err(DcError::GridNumbering { grids });
    }

    let mut order = DcOrder::new(nb);

    order.pmt = (0..nb).collect();
    order
        .pmt
        .sort_by_key(|&i| (case.bus[i].grid, !case.bus[i].has_ac()));

    let mut bus: Vec<_> = order.pmt.iter().map(|&i| case.bus[i].clone()).collect();

    // apply consecutive bus numbering
    order.i2e.push(0);
    for (i, b) in bus.iter().enumerate() {
        if order.e2i.insert(b.busdc_i, i + 1).is_some() {
            return Err(DcError::DuplicateBus(b.busdc_i));
        }
        order.i2e.push(b.busdc_i);
    }
    for (i, b) in bus.iter_mut().enumerate() {
        b.busdc_i = i + 1;
    }

    let mut branch = case.branch.clone();
    for (i, br) in branch.iter_mut().enumerate() {
        br.f_bus = e2i(&order.e2i, "branchdc", i, br.f_bus)?;
        br.t_bus = e2i(&order.e2i, "branchdc", i, br.t_bus)?;
    }
    let mut conv = case.conv.clone();
    for (i, cv) in conv.iter_mut().enumerate() {
        cv.busdc_i = e2i(&order.e2i, "convdc", i, cv.busdc_i)?;
    }
    let mut conv_dcdc = case.conv_dcdc.clone();
    if let Some(conv_dcdc) = conv_dcdc.as_mut() {
        for (i, cv) in conv_dcdc.iter_mut().enumerate() {
            cv.c_bus = e2i(&order.e2i, "convdcdc", i, cv.c_bus)?;
            cv.m_bus = e2i(&order.e2i, "convdcdc", i, cv.m_bus)?;
        }
    }

    case.bus = bus;
    case.branch = branch;
    case.conv = conv;
    case.conv_dcdc = conv_dcdc;

    order.state = State::Internal;
    debug!("renumbered {} DC buses in {} grid(s)", nb, grids.len());

    Ok(order)
}

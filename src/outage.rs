use crate::ac::{AcBranch, AcCase, Gen};
use crate::case::{BranchDc, BusDc, ConvDc, ConvDcDc, DcCase};
use crate::error::{DcError, Result};
use crate::opt::StatusPolicy;
use log::{debug, warn};

/// A component with an in-service status flag.
pub trait Outage: Clone {
    /// Table name used in diagnostics.
    const TABLE: &'static str;

    /// Raw status flag. Only 0 and 1 are valid.
    fn status(&self) -> f64;

    /// Resets power flow results of an out-of-service element.
    fn clear_flows(&mut self) {}
}

impl Outage for BranchDc {
    const TABLE: &'static str = "DC branch";

    fn status(&self) -> f64 {
        self.status
    }
}

impl Outage for ConvDc {
    const TABLE: &'static str = "AC/DC converter";

    fn status(&self) -> f64 {
        self.status
    }

    fn clear_flows(&mut self) {
        self.p_g = 0.0;
        self.q_g = 0.0;
    }
}

impl Outage for ConvDcDc {
    const TABLE: &'static str = "DC/DC converter";

    fn status(&self) -> f64 {
        self.status
    }

    fn clear_flows(&mut self) {
        // Only present once a power flow has attached them.
        for v in [&mut self.pc, &mut self.pm, &mut self.ploss] {
            if let Some(v) = v.as_mut() {
                *v = 0.0;
            }
        }
    }
}

impl Outage for AcBranch {
    const TABLE: &'static str = "AC branch";

    fn status(&self) -> f64 {
        self.br_status
    }
}

impl Outage for Gen {
    const TABLE: &'static str = "Generator";

    fn status(&self) -> f64 {
        self.gen_status
    }
}

/// In-service and out-of-service subsets of a component table, each with
/// the positions of its rows in the original table.
#[derive(Clone, Debug, PartialEq)]
pub struct Split<T> {
    pub on: Vec<T>,
    pub on_idx: Vec<usize>,
    pub off: Vec<T>,
    pub off_idx: Vec<usize>,
}

impl<T> Default for Split<T> {
    fn default() -> Self {
        Self {
            on: Vec::default(),
            on_idx: Vec::default(),
            off: Vec::default(),
            off_idx: Vec::default(),
        }
    }
}

impl<T: Clone> Split<T> {
    /// Reassembles the full table in original row order from (possibly
    /// updated) in-service rows and the out-of-service rows.
    pub fn merge(&self, on: &[T]) -> Result<Vec<T>> {
        if on.len() != self.on_idx.len() {
            return Err(DcError::Order(format!(
                "expected {} in-service rows, found {}",
                self.on_idx.len(),
                on.len()
            )));
        }
        let mut rows: Vec<(usize, T)> = self
            .on_idx
            .iter()
            .copied()
            .zip(on.iter().cloned())
            .chain(self.off_idx.iter().copied().zip(self.off.iter().cloned()))
            .collect();
        rows.sort_by_key(|(i, _)| *i);
        Ok(rows.into_iter().map(|(_, r)| r).collect())
    }
}

fn check_status<T: Outage>(rows: &[T]) -> Result<()> {
    match rows
        .iter()
        .enumerate()
        .find(|(_, r)| r.status() != 0.0 && r.status() != 1.0)
    {
        Some((row, r)) => Err(DcError::InvalidStatus {
            table: T::TABLE,
            row,
            value: r.status(),
        }),
        None => Ok(()),
    }
}

/// Splits `rows` by status. Flows of out-of-service rows are cleared.
fn split<T: Outage>(rows: &[T], on: impl Fn(f64) -> bool) -> Split<T> {
    let mut s = Split::default();
    for (i, r) in rows.iter().enumerate() {
        if on(r.status()) {
            s.on.push(r.clone());
            s.on_idx.push(i);
        } else {
            let mut r = r.clone();
            r.clear_flows();
            s.off.push(r);
            s.off_idx.push(i);
        }
    }
    debug!(
        "{}: {} in service, {} out of service",
        T::TABLE,
        s.on.len(),
        s.off.len()
    );
    s
}

/// Splits DC branches into in-service and out-of-service sets.
pub fn brchdc_out(branch: &[BranchDc]) -> Result<Split<BranchDc>> {
    check_status(branch)?;
    Ok(split(branch, |s| s == 1.0))
}

/// Original AC attachment of the DC bus of an out-of-service converter.
#[derive(Clone, Debug, PartialEq)]
pub struct AcRestore {
    /// Converter row.
    pub conv: usize,
    /// DC bus row, in external row order.
    pub bus: usize,
    /// Original `busac_i` of the DC bus.
    pub busac_i: usize,
}

/// Splits AC/DC converters into in-service and out-of-service sets.
///
/// Out-of-service converters have their powers zeroed and the AC connection
/// of their DC bus removed from `bus`. The returned record restores the
/// connections with [`restore_ac_buses`].
pub fn conv_out(bus: &mut [BusDc], conv: &[ConvDc]) -> Result<(Split<ConvDc>, Vec<AcRestore>)> {
    check_status(conv)?;
    let s = split(conv, |s| s == 1.0);

    let mut restore = Vec::with_capacity(s.off.len());
    for (&i, cv) in s.off_idx.iter().zip(&s.off) {
        let j = bus
            .iter()
            .position(|b| b.busdc_i == cv.busdc_i)
            .ok_or(DcError::UnresolvedBus {
                table: "convdc",
                row: i,
                bus: cv.busdc_i,
            })?;
        restore.push(AcRestore {
            conv: i,
            bus: j,
            busac_i: bus[j].busac_i,
        });
    }
    for r in &restore {
        bus[r.bus].busac_i = 0;
    }
    Ok((s, restore))
}

/// Reinstates the AC connections removed by [`conv_out`].
pub fn restore_ac_buses(bus: &mut [BusDc], restore: &[AcRestore]) -> Result<()> {
    for r in restore {
        let b = bus.get_mut(r.bus).ok_or_else(|| {
            DcError::Order(format!("no DC bus row {} to restore", r.bus))
        })?;
        b.busac_i = r.busac_i;
    }
    Ok(())
}

/// Splits DC/DC converters into in-service and out-of-service sets.
///
/// An absent or empty converter table yields an empty split.
pub fn convdcdc_out(conv: Option<&[ConvDcDc]>, policy: StatusPolicy) -> Result<Split<ConvDcDc>> {
    let conv = match conv {
        Some(conv) if !conv.is_empty() => conv,
        _ => return Ok(Split::default()),
    };
    if let Err(err) = check_status(conv) {
        match policy {
            StatusPolicy::Strict => return Err(err),
            StatusPolicy::Lenient => warn!("{}", err),
        }
    }
    Ok(split(conv, |s| s == 1.0))
}

/// Splits AC branches into in-service and out-of-service sets.
pub fn brch_out(ac: &AcCase) -> Result<Split<AcBranch>> {
    check_status(&ac.branch)?;
    Ok(split(&ac.branch, |s| s == 1.0))
}

/// Splits generators into in-service and out-of-service sets.
pub fn gen_out(ac: &AcCase) -> Result<Split<Gen>> {
    check_status(&ac.gen)?;
    Ok(split(&ac.gen, |s| s > 0.0))
}

/// Outage bookkeeping of one DC case.
#[derive(Clone, Debug, PartialEq)]
pub struct DcOutages {
    pub branch: Split<BranchDc>,
    pub conv: Split<ConvDc>,
    pub conv_dcdc: Split<ConvDcDc>,
    pub ac_restore: Vec<AcRestore>,
}

/// Removes out-of-service branches and converters from `case`, leaving only
/// in-service rows, and returns what is needed to put them back.
pub fn dc_outages(case: &mut DcCase, policy: StatusPolicy) -> Result<DcOutages> {
    let branch = brchdc_out(&case.branch)?;
    let (conv, ac_restore) = conv_out(&mut case.bus, &case.conv)?;
    let conv_dcdc = convdcdc_out(case.conv_dcdc.as_deref(), policy)?;

    case.branch = branch.on.clone();
    case.conv = conv.on.clone();
    if case.conv_dcdc.is_some() {
        case.conv_dcdc = Some(conv_dcdc.on.clone());
    }

    Ok(DcOutages {
        branch,
        conv,
        conv_dcdc,
        ac_restore,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{case5_dc, case_ac, dcdc};
    use anyhow::Result;

    fn complete<T>(s: &Split<T>, n: usize) {
        let mut all = [s.on_idx.clone(), s.off_idx.clone()].concat();
        all.sort();
        assert_eq!(all, (0..n).collect::<Vec<_>>());
        assert!(s.on_idx.iter().all(|i| !s.off_idx.contains(i)));
    }

    #[test]
    fn branch_partition() -> Result<()> {
        let mut case = case5_dc();
        case.branch[1].status = 0.0;

        let s = brchdc_out(&case.branch)?;
        complete(&s, case.branch.len());
        assert_eq!(s.on_idx, vec![0, 2]);
        assert_eq!(s.off_idx, vec![1]);
        assert_eq!(s.off[0], case.branch[1]);
        assert_eq!(s.on, vec![case.branch[0].clone(), case.branch[2].clone()]);
        Ok(())
    }

    #[test]
    fn invalid_branch_status() {
        let mut case = case5_dc();
        case.branch[2].status = 2.0;
        let err = brchdc_out(&case.branch).unwrap_err();
        assert_eq!(
            err,
            DcError::InvalidStatus {
                table: "DC branch",
                row: 2,
                value: 2.0
            }
        );

        case.branch[2].status = -1.0;
        assert!(brchdc_out(&case.branch).is_err());
    }

    #[test]
    fn converter_outage_zeroes_powers() -> Result<()> {
        let mut case = case5_dc();
        case.conv[2].status = 0.0;
        let bus0 = case.bus.clone();

        let (s, restore) = conv_out(&mut case.bus, &case.conv)?;
        complete(&s, case.conv.len());
        assert_eq!(s.off_idx, vec![2]);
        for cv in &s.off {
            assert_eq!(cv.p_g, 0.0);
            assert_eq!(cv.q_g, 0.0);
        }
        assert_ne!(case.conv[2].p_g, 0.0, "input rows must be left untouched");

        let j = bus0
            .iter()
            .position(|b| b.busdc_i == case.conv[2].busdc_i)
            .unwrap();
        assert_eq!(
            restore,
            vec![AcRestore {
                conv: 2,
                bus: j,
                busac_i: bus0[j].busac_i
            }]
        );
        assert_eq!(case.bus[j].busac_i, 0);

        restore_ac_buses(&mut case.bus, &restore)?;
        assert_eq!(case.bus, bus0);
        Ok(())
    }

    #[test]
    fn converter_on_unknown_bus() {
        let mut case = case5_dc();
        case.conv[0].status = 0.0;
        case.conv[0].busdc_i = 99;
        let err = conv_out(&mut case.bus, &case.conv).unwrap_err();
        assert!(matches!(err, DcError::UnresolvedBus { bus: 99, .. }));
    }

    #[test]
    fn invalid_converter_status() {
        let mut case = case5_dc();
        case.conv[0].status = 3.0;
        let bus0 = case.bus.clone();
        assert!(conv_out(&mut case.bus, &case.conv).is_err());
        assert_eq!(case.bus, bus0);
    }

    #[test]
    fn dcdc_absent_or_empty() -> Result<()> {
        let s = convdcdc_out(None, StatusPolicy::Strict)?;
        assert_eq!(s, Split::default());
        let s = convdcdc_out(Some(&[][..]), StatusPolicy::Strict)?;
        assert!(s.on.is_empty() && s.on_idx.is_empty());
        assert!(s.off.is_empty() && s.off_idx.is_empty());
        Ok(())
    }

    #[test]
    fn dcdc_outage_clears_results_when_present() -> Result<()> {
        let mut with_results = dcdc(1, 2, 0.95, 0.1, 0.0);
        with_results.status = 0.0;
        with_results.pc = Some(5.0);
        with_results.pm = Some(-4.9);
        with_results.ploss = Some(0.1);
        let mut without = dcdc(2, 3, 0.9, 0.2, 0.01);
        without.status = 0.0;

        let s = convdcdc_out(
            Some(&[dcdc(1, 3, 1.0, 0.1, 0.0), with_results, without][..]),
            StatusPolicy::Strict,
        )?;
        complete(&s, 3);
        assert_eq!(s.on_idx, vec![0]);
        assert_eq!(s.off_idx, vec![1, 2]);
        assert_eq!(s.off[0].pc, Some(0.0));
        assert_eq!(s.off[0].pm, Some(0.0));
        assert_eq!(s.off[0].ploss, Some(0.0));
        assert_eq!(s.off[1].pc, None);
        assert_eq!(s.off[1].ploss, None);
        Ok(())
    }

    #[test]
    fn dcdc_status_policy() -> Result<()> {
        let mut bad = dcdc(1, 2, 0.95, 0.1, 0.0);
        bad.status = 2.0;
        let conv = [dcdc(1, 3, 1.0, 0.1, 0.0), bad];

        let err = convdcdc_out(Some(&conv[..]), StatusPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            DcError::InvalidStatus {
                table: "DC/DC converter",
                row: 1,
                value: 2.0
            }
        );

        let s = convdcdc_out(Some(&conv[..]), StatusPolicy::Lenient)?;
        assert_eq!(s.on_idx, vec![0]);
        assert_eq!(s.off_idx, vec![1]);
        Ok(())
    }

    #[test]
    fn fractional_status_is_invalid() -> Result<()> {
        let mut case = case5_dc();
        case.branch[0].status = 0.5;
        assert_eq!(
            brchdc_out(&case.branch).unwrap_err(),
            DcError::InvalidStatus {
                table: "DC branch",
                row: 0,
                value: 0.5
            }
        );

        let mut half = dcdc(1, 2, 0.95, 0.1, 0.0);
        half.status = 0.5;
        let conv = [half];
        assert!(convdcdc_out(Some(&conv[..]), StatusPolicy::Strict).is_err());
        let s = convdcdc_out(Some(&conv[..]), StatusPolicy::Lenient)?;
        assert!(s.on.is_empty());
        assert_eq!(s.off_idx, vec![0]);
        Ok(())
    }

    #[test]
    fn ac_partitions() -> Result<()> {
        let mut ac = case_ac();
        ac.branch[0].br_status = 0.0;
        ac.gen[1].gen_status = 0.0;

        let br = brch_out(&ac)?;
        complete(&br, ac.branch.len());
        assert_eq!(br.off_idx, vec![0]);
        assert_eq!(br.off[0], ac.branch[0]);
        assert!(br.on.iter().all(|b| b.is_on()));

        let g = gen_out(&ac)?;
        complete(&g, ac.gen.len());
        assert_eq!(g.off_idx, vec![1]);
        assert_eq!(g.off[0], ac.gen[1]);

        ac.gen[0].gen_status = 2.0;
        assert!(matches!(
            gen_out(&ac).unwrap_err(),
            DcError::InvalidStatus { table: "Generator", row: 0, .. }
        ));
        ac.branch[1].br_status = -1.0;
        assert!(brch_out(&ac).is_err());
        Ok(())
    }

    #[test]
    fn merge_restores_row_order() -> Result<()> {
        let mut case = case5_dc();
        case.branch[0].status = 0.0;
        let s = brchdc_out(&case.branch)?;
        assert_eq!(s.merge(&s.on)?, case.branch);
        assert!(s.merge(&[]).is_err());
        Ok(())
    }

    #[test]
    fn outages_leave_in_service_rows() -> Result<()> {
        let mut case = case5_dc();
        case.branch[2].status = 0.0;
        case.conv[2].status = 0.0;
        let o = dc_outages(&mut case, StatusPolicy::Strict)?;
        assert_eq!(case.branch.len(), 2);
        assert_eq!(case.conv.len(), 2);
        assert!(case.conv_dcdc.is_none());
        assert_eq!(o.ac_restore.len(), 1);
        assert_eq!(o.branch.off_idx, vec![2]);
        Ok(())
    }
}

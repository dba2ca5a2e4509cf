use crate::ac::AcCase;
use crate::case::{BranchDc, BusDc, ConvDcDc, DcCase};
use crate::rows::Row;


pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "expected {}, got {}",
        expected,
        actual
    );
}

pub(crate) fn bus(busdc_i: usize, busac_i: usize, grid: usize) -> BusDc {
    BusDc {
        busdc_i,
        busac_i,
        grid,
        pdc: 0.0,
        vdc: 1.0,
        base_kvdc: 345.0,
        vdcmax: 1.1,
        vdcmin: 0.9,
        cdc: 0.0,
    }
}

pub(crate) fn branch(f_bus: usize, t_bus: usize, r: f64) -> BranchDc {
    BranchDc {
        f_bus,
        t_bus,
        r,
        l: 0.0,
        c: 0.0,
        rate_a: 100.0,
        rate_b: 100.0,
        rate_c: 100.0,
        status: 1.0,
        pf: None,
        pt: None,
    }
}

pub(crate) fn dcdc(c_bus: usize, m_bus: usize, d: f64, r: f64, g: f64) -> ConvDcDc {
    ConvDcDc {
        c_bus,
        m_bus,
        d,
        r,
        g,
        rate: 100.0,
        l: 0.0,
        c: 0.0,
        status: 1.0,
        pc: None,
        pm: None,
        ploss: None,
    }
}

fn conv_row(bus: f64, type_dc: f64, p: f64, q: f64) -> Row {
    vec![
        bus, type_dc, 1.0, p, q, 1.0, 0.0015, 0.1121, 0.0887, 0.0001, 0.16428, 345.0, 1.1, 0.9,
        1.1, 1.0, 1.103, 0.887, 2.885, 4.371,
    ]
}

/// Three-terminal DC grid with two further buses at a lower voltage level
/// (no branches, reached by DC/DC converters in some tests).
pub(crate) fn case5_dc() -> DcCase {
    let busdc: Vec<Row> = vec![
        vec![1.0, 2.0, 1.0, 0.0, 1.0, 345.0, 1.1, 0.9, 0.0],
        vec![2.0, 3.0, 1.0, 0.0, 1.0, 345.0, 1.1, 0.9, 0.0],
        vec![3.0, 5.0, 1.0, 0.0, 1.0, 345.0, 1.1, 0.9, 0.0],
        vec![4.0, 0.0, 1.0, 10.0, 1.0, 150.0, 1.1, 0.9, 0.0],
        vec![5.0, 0.0, 1.0, -5.0, 1.0, 150.0, 1.1, 0.9, 0.0],
    ];
    let convdc: Vec<Row> = vec![
        conv_row(1.0, 1.0, -60.0, -40.0),
        conv_row(2.0, 2.0, 0.0, 0.0),
        conv_row(3.0, 1.0, 35.0, 5.0),
    ];
    let branchdc: Vec<Row> = vec![
        vec![1.0, 2.0, 0.052, 0.0, 0.0, 100.0, 100.0, 100.0, 1.0],
        vec![2.0, 3.0, 0.052, 0.0, 0.0, 100.0, 100.0, 100.0, 1.0],
        vec![1.0, 3.0, 0.073, 0.0, 0.0, 100.0, 100.0, 100.0, 1.0],
    ];
    DcCase::from_tables(100.0, 100.0, 2.0, &busdc, &convdc, &branchdc, None)
        .expect("valid case")
}

/// DC part of the 33-bus hybrid AC/DC distribution network: two DC grids,
/// non-consecutive bus numbers.
pub(crate) fn case33_dc() -> DcCase {
    #[rustfmt::skip]
    let busdc: Vec<Row> = vec![
        vec![8.0, 7.0, 1.0, 0.2463, 1.02, 20.67, 1.1, 0.9, 0.0],
        vec![9.0, 0.0, 1.0, 0.1263, 1.00, 20.67, 1.1, 0.9, 0.0],
        vec![10.0, 0.0, 1.0, -0.1237, 1.00, 20.67, 1.1, 0.9, 0.0],
        vec![11.0, 12.0, 1.0, 0.3158, 1.00, 20.67, 1.1, 0.9, 0.0],
        vec![16.0, 15.0, 1.0, 0.0632, 1.00, 20.67, 1.1, 0.9, 0.0],
        vec![17.0, 0.0, 1.0, -0.1868, 1.00, 20.67, 1.1, 0.9, 0.0],
        vec![18.0, 33.0, 1.0, 0.0924, 1.00, 20.67, 1.1, 0.9, 0.0],
        vec![21.0, 20.0, 1.0, 0.3158, 1.00, 20.67, 1.1, 0.9, 0.0],
        vec![22.0, 0.0, 1.0, -0.0653, 1.00, 20.67, 1.1, 0.9, 0.0],
        vec![26.0, 6.0, 2.0, 0.1232, 1.00, 20.67, 1.1, 0.9, 0.0],
        vec![27.0, 0.0, 2.0, 0.2105, 1.00, 20.67, 1.1, 0.9, 0.0],
        vec![28.0, 29.0, 2.0, 0.1263, 1.00, 20.67, 1.1, 0.9, 0.0],
    ];
    #[rustfmt::skip]
    let convdc: Vec<Row> = [
        (8.0, 2.0, 2.0, 0.0, 0.0, 1.03),
        (26.0, 2.0, 2.0, 0.0, 0.0, 1.0),
        (18.0, 2.0, 2.0, 0.0, 0.0, 1.0),
        (11.0, 1.0, 1.0, 0.25, 0.075, 1.0),
        (28.0, 1.0, 1.0, 0.76, 0.25, 1.0),
        (16.0, 1.0, 1.0, 0.28, 0.092, 1.0),
        (21.0, 1.0, 1.0, -1.2, -0.4, 1.0),
    ]
    .iter()
    .map(|&(bus, type_dc, type_ac, p, q, vtar)| {
        vec![
            bus, type_dc, type_ac, p, q, vtar, 0.0, 0.0, 0.0, 0.0001, 0.16428, 12.66, 1.1, 0.9,
            1.2, 1.0, 0.0, 0.0, 0.0, 0.0,
        ]
    })
    .collect();
    #[rustfmt::skip]
    let branchdc: Vec<Row> = [
        (8.0, 9.0, 0.482),
        (9.0, 10.0, 0.487),
        (10.0, 11.0, 0.092),
        (16.0, 17.0, 0.603),
        (17.0, 18.0, 0.343),
        (21.0, 22.0, 0.332),
        (26.0, 27.0, 0.133),
        (27.0, 28.0, 0.496),
        (16.0, 22.0, 0.936),
    ]
    .iter()
    .map(|&(f, t, r)| vec![f, t, r, 0.0, 0.0, 100.0, 100.0, 100.0, 1.0])
    .collect();

    DcCase::from_tables(10.0, 100.0, 1.0, &busdc, &convdc, &branchdc, None)
        .expect("valid case")
}

pub(crate) fn case_ac() -> AcCase {
    let gen: Vec<Row> = vec![
        vec![1.0, 0.0, 0.0, 500.0, -500.0, 1.06, 100.0, 1.0, 250.0, 10.0],
        vec![2.0, 40.0, 30.0, 300.0, -300.0, 1.0, 100.0, 1.0, 300.0, 10.0],
    ];
    let branch: Vec<Row> = vec![
        vec![1.0, 2.0, 0.02, 0.06, 0.06, 100.0, 100.0, 100.0, 0.0, 0.0, 1.0],
        vec![1.0, 3.0, 0.08, 0.24, 0.05, 100.0, 100.0, 100.0, 0.0, 0.0, 1.0],
        vec![2.0, 3.0, 0.06, 0.18, 0.04, 100.0, 100.0, 100.0, 0.0, 0.0, 1.0],
    ];
    AcCase::from_tables(100.0, &gen, &branch).expect("valid case")
}

use thiserror::Error;

/// Fatal conditions detected while preparing a DC network for power flow.
///
/// Every variant aborts the pipeline at the stage that raised it. Soft
/// diagnostics are logged rather than returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DcError {
    #[error("{table} status flags must be either 0 or 1 (row {row} has {value})")]
    InvalidStatus {
        table: &'static str,
        row: usize,
        value: f64,
    },

    #[error("DC grid numbering is not successive: {grids:?}")]
    GridNumbering { grids: Vec<usize> },

    #[error("DC bus {0} is defined more than once")]
    DuplicateBus(usize),

    #[error("{table} row {row} refers to unknown DC bus {bus}")]
    UnresolvedBus {
        table: &'static str,
        row: usize,
        bus: usize,
    },

    #[error(
        "the DC voltages at both sides of DC branch {branch} do not match ({from_kv} kV / {to_kv} kV)"
    )]
    BaseVoltageMismatch {
        branch: usize,
        from_kv: f64,
        to_kv: f64,
    },

    #[error("{element} {row} has zero series resistance")]
    DegenerateImpedance { element: &'static str, row: usize },

    #[error("{name} must be positive and finite (got {value})")]
    InvalidBase { name: &'static str, value: f64 },

    #[error("DC grid polarity must be 1 (monopolar) or 2 (symmetric monopolar), got {0}")]
    InvalidPolarity(f64),

    #[error("{table} row {row} has invalid {field} type {value}")]
    InvalidControl {
        table: &'static str,
        row: usize,
        field: &'static str,
        value: f64,
    },

    #[error("{table} row {row}: {msg}")]
    Table {
        table: &'static str,
        row: usize,
        msg: String,
    },

    #[error("bus ordering: {0}")]
    Order(String),

    #[error("power flow solver: {0}")]
    Solver(String),
}

pub type Result<T> = std::result::Result<T, DcError>;

use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum State {
    Internal,
    #[default]
    External,
}

/// Mapping between external DC bus numbers and consecutive internal ones.
///
/// Internal bus `k` (starting at 1) is found at row `k - 1` of the sorted
/// bus table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DcOrder {
    pub state: State,

    /// Original row of each sorted bus row.
    pub pmt: Vec<usize>,

    /// External bus number of each internal bus. Element 0 is a dummy.
    pub i2e: Vec<usize>,

    pub e2i: HashMap<usize, usize>,
}

impl DcOrder {
    pub(crate) fn new(nb: usize) -> Self {
        Self {
            state: State::External,
            pmt: Vec::with_capacity(nb),
            i2e: Vec::with_capacity(nb + 1),
            e2i: HashMap::with_capacity(nb),
        }
    }

    /// Number of buses covered by the ordering.
    pub fn nb(&self) -> usize {
        self.pmt.len()
    }
}

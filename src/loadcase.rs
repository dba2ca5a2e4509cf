use crate::case::DcCase;
use crate::rows::{branchdc_to_array, busdc_to_array, convdc_to_array, convdcdc_to_array, Row};
use anyhow::{format_err, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// DC case file layout: numeric tables keyed by section name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DcCaseFile {
    #[serde(rename = "baseMVAac")]
    pub base_mva_ac: f64,
    #[serde(rename = "baseMVAdc")]
    pub base_mva_dc: f64,
    pub pol: f64,
    pub busdc: Vec<Row>,
    pub convdc: Vec<Row>,
    pub branchdc: Vec<Row>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convdcdc: Option<Vec<Row>>,
}

impl DcCaseFile {
    pub fn to_case(&self) -> crate::error::Result<DcCase> {
        DcCase::from_tables(
            self.base_mva_ac,
            self.base_mva_dc,
            self.pol,
            &self.busdc,
            &self.convdc,
            &self.branchdc,
            self.convdcdc.as_deref(),
        )
    }

    pub fn from_case(case: &DcCase) -> Self {
        Self {
            base_mva_ac: case.base_mva_ac,
            base_mva_dc: case.base_mva_dc,
            pol: case.pol.poles(),
            busdc: case.bus.iter().map(busdc_to_array).collect(),
            convdc: case.conv.iter().map(convdc_to_array).collect(),
            branchdc: case.branch.iter().map(branchdc_to_array).collect(),
            convdcdc: case
                .conv_dcdc
                .as_ref()
                .map(|c| c.iter().map(convdcdc_to_array).collect()),
        }
    }
}

pub fn load_case(case_path: &Path) -> Result<DcCase> {
    let file = File::open(case_path)
        .map_err(|err| format_err!("{}: {}", case_path.display(), err))?;
    let data: DcCaseFile = serde_json::from_reader(BufReader::new(file))?;
    Ok(data.to_case()?)
}

pub fn save_case(case_path: &Path, case: &DcCase) -> Result<()> {
    let file = File::create(case_path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &DcCaseFile::from_case(case))?;
    Ok(())
}

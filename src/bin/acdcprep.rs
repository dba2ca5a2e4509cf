use acdcprep::debug::{format_f64_vec, format_rect_vec};
use acdcprep::{load_case, prepare_dc, save_case, PrepOptBuilder, StatusPolicy};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Prepares the DC part of a hybrid AC/DC network for power flow.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The input file (JSON DC case).
    #[arg(required = true)]
    input: PathBuf,

    /// Write the internal (renumbered, system base) case to this file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// System MVA base.
    #[arg(long, default_value_t = 100.0)]
    base_mva: f64,

    /// Treat invalid DC/DC converter status flags as out of service
    /// instead of failing.
    #[arg(long, default_value_t = false)]
    lenient_dcdc: bool,
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_level(false)
        .format_target(false)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match execute(&cli) {
        Ok(_) => {
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(2);
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let case = load_case(&cli.input)?;

    let opt = PrepOptBuilder::default()
        .base_mva(cli.base_mva)
        .dcdc_status(if cli.lenient_dcdc {
            StatusPolicy::Lenient
        } else {
            StatusPolicy::Strict
        })
        .build()?;

    let prepared = prepare_dc(case, &opt)?;

    println!("i2e: {:?}", &prepared.order.i2e[1..]);
    println!("pmt: {:?}", prepared.order.pmt);
    println!(
        "out of service: branches {:?}, converters {:?}, DC/DC converters {:?}",
        prepared.outages.branch.off_idx,
        prepared.outages.conv.off_idx,
        prepared.outages.conv_dcdc.off_idx
    );
    let conv = &prepared.case.conv;
    let z_tf: Vec<_> = conv.iter().map(|cv| cv.z_tf()).collect();
    let y_f: Vec<_> = conv.iter().map(|cv| cv.y_f()).collect();
    let z_c: Vec<_> = conv.iter().map(|cv| cv.z_c()).collect();
    println!("Ztf: {}", format_rect_vec(&z_tf));
    println!("Yf: {}", format_rect_vec(&y_f));
    println!("Zc: {}", format_rect_vec(&z_c));
    let pdc: Vec<f64> = prepared.case.bus.iter().map(|b| b.pdc).collect();
    println!("Pdc: {}", format_f64_vec(&pdc));
    println!("Ybusdc:\n{}", prepared.ybus.y_bus.to_csr().to_table());

    if let Some(out_path) = &cli.output {
        save_case(out_path, &prepared.case)?;
    }

    Ok(())
}

use daplan_core::{normalize_address, Gazetteer};
use std::path::PathBuf;

pub fn run(address: &str, gazetteer_dir: PathBuf) -> Result<(), daplan_core::error::DaplanError> {
    let gazetteer = Gazetteer::load(&gazetteer_dir)?;
    println!("{}", normalize_address(address, &gazetteer));
    Ok(())
}

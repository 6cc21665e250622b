use daplan_core::Gazetteer;
use std::path::PathBuf;

pub fn run(gazetteer_dir: PathBuf) -> Result<(), daplan_core::error::DaplanError> {
    let gazetteer = Gazetteer::load(&gazetteer_dir)?;
    println!("Gazetteer loaded from {}", gazetteer_dir.display());
    println!("  streets:  {}", gazetteer.street_names().count());
    println!("  suffixes: {}", gazetteer.suffix_abbreviations().count());
    println!(
        "  suburbs:  {} (including MT aliases)",
        gazetteer.suburb_names().count()
    );
    println!(
        "  hundreds: {} (including MT aliases)",
        gazetteer.hundred_names().count()
    );
    Ok(())
}

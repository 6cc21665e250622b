use daplan_core::error::DaplanError;
use daplan_core::Record;

pub fn print(records: &[Record]) -> Result<(), DaplanError> {
    let json = serde_json::to_string_pretty(records)?;
    println!("{json}");
    Ok(())
}

use daplan_core::Record;

pub fn print(records: &[Record]) {
    if records.is_empty() {
        println!("No records extracted.");
        return;
    }

    let id_width = records
        .iter()
        .map(|r| r.identifier.len())
        .max()
        .unwrap_or(10);

    for record in records {
        println!(
            "{:<width$}  {}",
            record.identifier,
            record.address,
            width = id_width
        );
        match record.date_received {
            Some(date) => println!(
                "{:<width$}  {} (received {})",
                "",
                record.description,
                date.format("%d/%m/%Y"),
                width = id_width
            ),
            None => println!("{:<width$}  {}", "", record.description, width = id_width),
        }
    }
    println!();
    println!("{} record(s)", records.len());
}

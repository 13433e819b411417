use std::path::Path;

use jwt_keygen::common::provision;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .with_line_number(false)
        .init();

    // Generate the signing key pair and encode both formats
    let record = provision::generate()?;

    // Save the record to keys.json in the current directory
    provision::write_keys(&record, Path::new("keys.json"))?;
    println!("Signing keys saved to keys.json");

    Ok(())
}

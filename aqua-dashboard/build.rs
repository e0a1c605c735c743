use std::path::Path;

// Checks the embedded lake registry before it is baked into the binary.
fn main() {
    let fixture = Path::new("../fixtures/lakes.csv");
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(fixture)
        .expect("Failed to open fixtures/lakes.csv");

    let headers = rdr.headers().expect("lakes.csv has no header").clone();
    for column in ["ID", "NAME", "LOCATION", "LATITUDE", "LONGITUDE", "QUALITY"] {
        if !headers.iter().any(|h| h == column) {
            panic!("lakes.csv is missing the {} column", column);
        }
    }

    let rows = rdr.records().filter(|r| r.is_ok()).count();
    if rows == 0 {
        panic!("lakes.csv has no lakes");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/lakes.csv");
    println!("cargo:rerun-if-env-changed=GEMINI_API_KEY");
}

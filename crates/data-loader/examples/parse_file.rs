use data_loader::{open_lines, parse_record, Encoding};
use std::error::Error;
use std::path::Path;
use std::time::Instant;

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/movies.txt".to_string());

    println!("Parsing {}...\n", path);

    let start = Instant::now();
    let lines = open_lines(Path::new(&path), Encoding::Utf8)?;

    let mut records = 0usize;
    let mut actors = 0usize;
    let mut unknown_years = 0usize;
    for line in lines {
        let record = parse_record(&line?);
        records += 1;
        actors += record.actors.len();
        if record.year.is_unknown() {
            unknown_years += 1;
        }
    }
    let elapsed = start.elapsed();

    println!("=== Parse Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Records: {}", records);
    println!("Actor credits: {}", actors);
    println!("Unknown years: {}", unknown_years);
    println!("\nPerformance: {:.0} lines/second",
             records as f64 / elapsed.as_secs_f64());
    Ok(())
}

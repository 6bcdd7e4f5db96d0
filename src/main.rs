use std::env;
use std::fs::File;
use std::io;
use std::io::BufReader;

use engine_schematic::Schematic;

fn main() -> io::Result<()> {
    let schematic = match env::args().nth(1) {
        Some(path) => Schematic::read_from(BufReader::new(File::open(path)?))?,
        None => Schematic::read_from(io::stdin().lock())?,
    };

    println!("Sum of all part numbers: {}", schematic.part_number_sum());
    println!("Sum of all gear ratios: {}", schematic.gear_ratio_sum());

    Ok(())
}

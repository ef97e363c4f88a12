//! Simple inspector for UBIDs.
//!
//! ```text
//! cargo run --example inspect -- 849VCWC8+R9-3-2-1-4 7FG49QCJ+2V-05-3-2-4
//! ```

use ubid::{decode, encode_code_area, CodeArea, UbidParts};

fn format_box(lat_lo: f64, lng_lo: f64, lat_hi: f64, lng_hi: f64) -> String {
    format!("[{:.7}, {:.7}] .. [{:.7}, {:.7}]", lat_lo, lng_lo, lat_hi, lng_hi)
}

fn print_area(area: &CodeArea) {
    let cell = &area.center_of_mass;
    println!(
        "  centroid cell: {} (length {})",
        format_box(cell.latitude_lo, cell.longitude_lo, cell.latitude_hi, cell.longitude_hi),
        cell.code_length
    );
    println!(
        "  bounding box:  {}",
        format_box(area.latitude_lo, area.longitude_lo, area.latitude_hi, area.longitude_hi)
    );

    let resized = area.resize();
    println!(
        "  resized:       {}",
        format_box(
            resized.latitude_lo,
            resized.longitude_lo,
            resized.latitude_hi,
            resized.longitude_hi
        )
    );
    match encode_code_area(&resized) {
        Ok(code) => println!("  re-encoded:    {}", code),
        Err(e) => println!("  re-encoded:    failed ({})", e),
    }
}

fn main() {
    let codes: Vec<String> = std::env::args().skip(1).collect();
    let codes = if codes.is_empty() {
        vec!["849VCWC8+R9-3-2-1-4".to_string()]
    } else {
        codes
    };

    for code in &codes {
        println!("{}", code);
        match UbidParts::parse(code) {
            Ok(parts) => println!(
                "  offsets:       N={} E={} S={} W={}",
                parts.north, parts.east, parts.south, parts.west
            ),
            Err(e) => {
                println!("  {} ({})", e, e.code().code());
                continue;
            }
        }
        match decode(code.as_str()) {
            Ok(area) => print_area(&area),
            Err(e) => println!("  {} ({})", e, e.code().code()),
        }
    }
}

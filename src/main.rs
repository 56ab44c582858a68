//! # Mosaic CLI
//!
//! Usage:
//!   mosaic request.json
//!   echo '{ ... }' | mosaic
//!   mosaic --example > request.json
//!
//! Reads a layout request (viewport + configuration + sections), runs one
//! layout pass, and prints the resulting snapshot as JSON on stdout.

use std::env;
use std::fs;
use std::io::{self, Read};

fn main() {
    let args: Vec<String> = env::args().collect();

    // Handle --example flag
    if args.iter().any(|a| a == "--example") {
        println!("{}", example_request_json());
        return;
    }

    // Read input
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1]).expect("Failed to read input file")
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .expect("Failed to read stdin");
        buf
    };

    match mosaic::compute_json(&input) {
        Ok(snapshot) => println!("{}", snapshot),
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

fn example_request_json() -> &'static str {
    r#"{
  "viewport": { "width": 800, "height": 600 },
  "config": { "columns": 4, "padding": 8, "deviceClass": "Regular" },
  "sections": [
    { "kind": "Grid", "itemCount": 6, "headerHeight": 60 },
    { "kind": "List", "itemCount": 3, "headerHeight": 60, "rowHeight": 60 },
    { "kind": "List", "itemCount": 5, "headerHeight": 60, "rowHeights": [44, 60, 44, 90, 44] },
    { "kind": "List", "itemCount": 2, "headerHeight": 60, "footerHeight": 30 }
  ]
}"#
}

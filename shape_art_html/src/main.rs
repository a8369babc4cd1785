// Shape Art generator: CLI entry point.
//
// Produces randomly generated SVG artwork wrapped in HTML pages. By default
// all artworks of the standard table are written: art_piece1.html (1000
// shapes), art_piece2.html (300 shapes, no blue, square rectangles) and
// art_piece3.html (500 shapes, no green). See `cli.rs` for the flags.
//
// Usage:
//   cargo run -p shape_art_html --bin generate -- [--out-dir DIR] [--seed N]
//     [--config shapes.json] [--policy artworks.json] [--artwork ID]...
//     [--count N] [--log FILTER]

use shape_art_html::cli::{Options, run};
use shape_art_html::logging::init_logging;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match Options::parse(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    init_logging(options.log_filter.as_deref());

    match run(&options) {
        Ok(reports) => {
            for report in &reports {
                println!(
                    "Wrote {} ({} shapes) for {}",
                    report.path.display(),
                    report.shapes,
                    report.identifier
                );
                if let Some(s) = report.seed {
                    log::debug!("{} used seed {s}", report.identifier);
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

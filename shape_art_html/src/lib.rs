// shape_art_html: HTML documents and the command-line generator.
//
// The document assembler for `shape_art`: it takes an `ArtworkSpec` plus the
// ordered, already-rendered shape lines and writes a complete HTML page with
// an inline SVG canvas sized to the artwork.
//
// Module overview:
// - `cli.rs`:      Strict flag parsing (`Options`) and `run`, the whole
//                  select-and-write pass behind the binary.
// - `document.rs`: `HtmlWriter` and the fixed page layout; file creation
//                  and `DocumentError`.
// - `driver.rs`:   Per-artwork seeding and parallel production of files
//                  (rayon), returning an `ArtworkReport` per artwork.
// - `logging.rs`:  `env_logger` setup for the `generate` binary.
//
// The `generate` binary (`main.rs`) parses `Options`, installs the logger,
// calls `cli::run` and prints a line per written file.

pub mod cli;
pub mod document;
pub mod driver;
pub mod logging;

pub use document::{DocumentError, write_document, write_document_file};
pub use driver::{ArtworkReport, produce_all};

// HTML document assembly for rendered artwork.
//
// Wraps the already-rendered shape lines of one artwork in a minimal HTML
// page with an inline SVG canvas. The layout is fixed (three-space
// indentation unit, one line per element):
//
//   <!DOCTYPE html>
//   <html>
//   <head>
//      <title>...</title>
//   </head>
//   <body>
//      <!--Define SVG drawing box-->
//      <svg width="W" height="H">
//      <!--Generate art here-->
//      ...shape lines, already indented by the renderer...
//      </svg>
//   </body>
//   </html>
//
// `write_document` targets any `io::Write`; `write_document_file` creates the
// destination file and flushes it before returning. The file handle is
// closed on every exit path when the writer drops.

use shape_art::ArtworkSpec;
use shape_art::render::INDENT;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Nesting depth at which shape lines sit inside the document.
pub const SHAPE_DEPTH: usize = 1;

/// A document could not be written to its destination.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Line-oriented writer that indents by nesting depth.
pub struct HtmlWriter<W: Write> {
    out: W,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write `line` at `depth` indentation units, followed by a newline.
    pub fn line(&mut self, depth: usize, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}{}", INDENT.repeat(depth), line)
    }

    /// Write an HTML comment at `depth`.
    pub fn comment(&mut self, depth: usize, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}<!--{}-->", INDENT.repeat(depth), text)
    }

    /// Write a line that already carries its own indentation.
    pub fn raw(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    pub fn head(&mut self, title: &str) -> io::Result<()> {
        self.line(0, "<!DOCTYPE html>")?;
        self.line(0, "<html>")?;
        self.line(0, "<head>")?;
        self.line(1, &format!("<title>{title}</title>"))?;
        self.line(0, "</head>")?;
        self.line(0, "<body>")
    }

    pub fn tail(&mut self) -> io::Result<()> {
        self.line(0, "</body>")?;
        self.line(0, "</html>")
    }

    pub fn open_canvas(&mut self, depth: usize, width: u32, height: u32) -> io::Result<()> {
        self.comment(depth, "Define SVG drawing box")?;
        self.line(depth, &format!("<svg width=\"{width}\" height=\"{height}\">"))
    }

    pub fn close_canvas(&mut self, depth: usize) -> io::Result<()> {
        self.line(depth, "</svg>")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Write a complete document for `spec` with the given rendered shape lines.
pub fn write_document<W: Write>(
    out: W,
    spec: &ArtworkSpec,
    title: &str,
    elements: &[String],
) -> io::Result<W> {
    let mut html = HtmlWriter::new(out);
    html.head(title)?;
    html.open_canvas(SHAPE_DEPTH, spec.canvas_width, spec.canvas_height)?;
    html.comment(SHAPE_DEPTH, "Generate art here")?;
    for element in elements {
        html.raw(element)?;
    }
    html.close_canvas(SHAPE_DEPTH)?;
    html.tail()?;
    html.flush()?;
    Ok(html.into_inner())
}

/// Create `path` and write the document for `spec` into it.
pub fn write_document_file(
    path: &Path,
    spec: &ArtworkSpec,
    elements: &[String],
) -> Result<(), DocumentError> {
    let file = File::create(path).map_err(|source| DocumentError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_document(BufWriter::new(file), spec, &spec.title, elements).map_err(|source| {
        DocumentError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;
    log::debug!("wrote {} ({} elements)", path.display(), elements.len());
    Ok(())
}

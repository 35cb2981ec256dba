//! Conversion of rendered SVG documents to PDF.

use std::fs::File;
use std::io::{Error, Write};
use usvg::{TreeParsing, TreeTextToPath};

/// Convert a rendered SVG document into PDF bytes.
///
/// Text is converted to outlines against the system font database
/// before the conversion.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>, String> {
    let options = usvg::Options::default();
    let mut tree =
        usvg::Tree::from_str(svg, &options).map_err(|err| err.to_string())?;
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    tree.convert_text(&db);
    Result::Ok(svg2pdf::convert_tree(&tree, svg2pdf::Options::default()))
}

/// Save the PDF bytes to a file.
pub fn save_to_file(filename: &str, pdf: &[u8]) -> Result<(), Error> {
    let mut f = File::create(filename)?;
    f.write_all(pdf)?;
    log::info!("Wrote {}", filename);
    Result::Ok(())
}

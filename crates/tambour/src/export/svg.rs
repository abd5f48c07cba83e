//! Vector export (`<name>.svg`): one small filled circle per stitch.
//!
//! The document is built with quick-xml's writer rather than string
//! formatting, and the only user-controlled value in it (the color) is
//! re-emitted from its parsed form. Nothing the user typed is copied into
//! the markup verbatim.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::color::Color;
use crate::error::ExportError;
use crate::generator::Layout;

/// Radius of each stitch marker in canvas units.
pub const STITCH_RADIUS: f64 = 1.2;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Serialize a layout, rejecting a color outside the safe grammar.
pub fn serialize(layout: &Layout, color: &str) -> Result<Vec<u8>, ExportError> {
    let color = Color::parse(color)?;
    write_document(layout, color)
}

/// Serialize a layout, substituting [`Color::FALLBACK`] for an invalid color.
///
/// Used where an export must always succeed; the substitution is logged.
pub fn serialize_or_fallback(layout: &Layout, color: &str) -> Result<Vec<u8>, ExportError> {
    let color = Color::parse(color).unwrap_or_else(|err| {
        tracing::warn!(error = %err, fallback = %Color::FALLBACK, "invalid stitch color, using fallback");
        Color::FALLBACK
    });
    write_document(layout, color)
}

/// Write the SVG document for an already-validated color.
pub fn write_document(layout: &Layout, color: Color) -> Result<Vec<u8>, ExportError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;

    let view_box = format!("0 0 {} {}", layout.width, layout.height);
    let root = BytesStart::new("svg")
        .with_attributes([("xmlns", SVG_NAMESPACE), ("viewBox", view_box.as_str())]);
    writer.write_event(Event::Start(root)).map_err(xml_error)?;

    let fill = color.to_hex();
    let opacity = color.opacity().map(|o| format!("{:.3}", o));
    let mut group = BytesStart::new("g").with_attributes([("stroke", "none"), ("fill", fill.as_str())]);
    if let Some(opacity) = &opacity {
        group.push_attribute(("fill-opacity", opacity.as_str()));
    }
    writer.write_event(Event::Start(group)).map_err(xml_error)?;

    let radius = STITCH_RADIUS.to_string();
    for stitch in layout.iter() {
        let (cx, cy) = (stitch.x.to_string(), stitch.y.to_string());
        let circle = BytesStart::new("circle")
            .with_attributes([("cx", cx.as_str()), ("cy", cy.as_str()), ("r", radius.as_str())]);
        writer.write_event(Event::Empty(circle)).map_err(xml_error)?;
    }

    writer.write_event(Event::End(BytesEnd::new("g"))).map_err(xml_error)?;
    writer.write_event(Event::End(BytesEnd::new("svg"))).map_err(xml_error)?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

fn xml_error<E: std::fmt::Display>(err: E) -> ExportError {
    ExportError::Svg(err.to_string())
}

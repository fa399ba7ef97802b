//! Sitemap XML generation
//!
//! Documents follow the sitemaps.org 0.9 protocol: a `urlset` root with one
//! `url` entry per location, each carrying a `loc` and a `lastmod` date.

use crate::output::traits::{OutputError, OutputResult};
use chrono::NaiveDate;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::collections::HashSet;
use url::Url;

/// Namespace of the sitemap protocol
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Builds a sitemap for `urls`, stamped with today's local date
pub fn build_sitemap(urls: &HashSet<Url>) -> OutputResult<String> {
    build_sitemap_dated(urls, chrono::Local::now().date_naive())
}

/// Builds a sitemap for `urls` with `lastmod` set to `date`
///
/// Entries are sorted by URL text so repeated runs produce identical files.
/// The document is indented with two spaces per level and ends with a
/// newline.
pub fn build_sitemap_dated(urls: &HashSet<Url>, date: NaiveDate) -> OutputResult<String> {
    let mut locations: Vec<&str> = urls.iter().map(Url::as_str).collect();
    locations.sort_unstable();

    let lastmod = date.format("%Y-%m-%d").to_string();
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(format_error)?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NAMESPACE));
    writer
        .write_event(Event::Start(urlset))
        .map_err(format_error)?;

    for location in locations {
        writer
            .write_event(Event::Start(BytesStart::new("url")))
            .map_err(format_error)?;
        write_text_element(&mut writer, "loc", location)?;
        write_text_element(&mut writer, "lastmod", &lastmod)?;
        writer
            .write_event(Event::End(BytesEnd::new("url")))
            .map_err(format_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("urlset")))
        .map_err(format_error)?;

    let mut xml = String::from_utf8(writer.into_inner()).map_err(format_error)?;
    xml.push('\n');
    Ok(xml)
}

/// Writes `<name>text</name>` on one line; the text is XML-escaped
fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> OutputResult<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(format_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(format_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(format_error)?;
    Ok(())
}

fn format_error<E: std::fmt::Display>(error: E) -> OutputError {
    OutputError::Format(error.to_string())
}

//! sitemap-gen - Generate sitemap.xml for a static tools site
//!
//! Reads the tool manifest (`index.json`), checks the site checkout for page
//! modification dates, and writes a sitemap-protocol `sitemap.xml` listing the
//! home page, auxiliary pages, and a detail and app page per tool.

pub mod cli;
pub mod config;
pub mod dates;
pub mod error;
pub mod manifest;
pub mod sitemap;
pub mod util;

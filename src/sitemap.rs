//! Sitemap entry collection and XML rendering.
//!
//! Entries are emitted in a fixed order: the home page, the auxiliary pages
//! that exist on disk, then two entries (detail page, app page) per tool in
//! manifest order.

use chrono::NaiveDate;
use quick_xml::escape::escape;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use url::Url;

use crate::config::SiteConfig;
use crate::dates;
use crate::error::{Result, SitemapError};
use crate::manifest::{Manifest, ToolRecord};
use crate::util::{check_slug, slug_segments};

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Directory holding one subdirectory per tool slug
pub const TOOLS_DIR: &str = "tools";
pub const TOOL_DETAIL_FILE: &str = "index.html";
pub const TOOL_APP_FILE: &str = "app.html";

/// Change frequency hints used by this site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sitemap priority in tenths, rendered with one decimal (`0.8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority(u8);

impl Priority {
    pub const HOME: Priority = Priority(10);
    pub const AUXILIARY: Priority = Priority(5);
    pub const TOOL_DETAIL: Priority = Priority(8);
    pub const TOOL_APP: Priority = Priority(7);
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub changefreq: ChangeFrequency,
    pub priority: Priority,
}

enum AuxLoc {
    /// Path on the site, relative to the base URL
    Site(&'static str),
    /// The configured contributing-guide URL
    Contributing,
}

struct AuxPage {
    file: &'static str,
    loc: AuxLoc,
}

const AUX_PAGES: [AuxPage; 2] = [
    AuxPage {
        file: "reference.html",
        loc: AuxLoc::Site("reference.html"),
    },
    AuxPage {
        file: "CONTRIBUTING.md",
        loc: AuxLoc::Contributing,
    },
];

/// Ordered list of sitemap entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sitemap {
    pub entries: Vec<UrlEntry>,
}

impl Sitemap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as a sitemap-protocol XML document ending with a newline.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_NS));
        for entry in &self.entries {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape(entry.loc.as_str())));
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                dates::format_date(entry.lastmod)
            ));
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                entry.changefreq
            ));
            xml.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }
        xml.push_str("</urlset>\n");
        xml
    }
}

/// Builds the sitemap for a site checked out at `root`.
pub struct SitemapBuilder {
    root: PathBuf,
    base: Url,
    contributing: Url,
    today: NaiveDate,
}

fn parse_absolute(url: &str) -> Result<Url> {
    let mut parsed = Url::parse(url).map_err(|e| SitemapError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    if parsed.cannot_be_a_base() {
        return Err(SitemapError::InvalidUrl {
            url: url.to_string(),
            reason: "URL cannot carry a path".to_string(),
        });
    }
    parsed.set_query(None);
    parsed.set_fragment(None);
    Ok(parsed)
}

impl SitemapBuilder {
    pub fn new(root: &Path, site: &SiteConfig, today: NaiveDate) -> Result<Self> {
        Ok(Self {
            root: root.to_path_buf(),
            base: parse_absolute(&site.base_url)?,
            contributing: parse_absolute(&site.contributing_url)?,
            today,
        })
    }

    /// URL for a path under the base URL. Each segment is percent-encoded on
    /// its own; a trailing `""` segment yields a trailing slash.
    fn page_url(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.to_string()
    }

    pub fn build(&self, manifest: &Manifest) -> Sitemap {
        let mut entries = vec![UrlEntry {
            loc: self.page_url(&[""]),
            lastmod: self.today,
            changefreq: ChangeFrequency::Daily,
            priority: Priority::HOME,
        }];

        for page in &AUX_PAGES {
            let path = self.root.join(page.file);
            let Some(lastmod) = dates::file_date(&path) else {
                debug!("Skipping {}: not found", path.display());
                continue;
            };
            let loc = match page.loc {
                AuxLoc::Site(rel) => self.page_url(&[rel]),
                AuxLoc::Contributing => self.contributing.to_string(),
            };
            entries.push(UrlEntry {
                loc,
                lastmod,
                changefreq: ChangeFrequency::Monthly,
                priority: Priority::AUXILIARY,
            });
        }

        for tool in &manifest.tools {
            let Some(slug) = tool.slug() else {
                debug!("Skipping tool record without slug");
                continue;
            };
            if let Err(reason) = check_slug(slug) {
                warn!("Skipping tool: {}", reason);
                continue;
            }
            entries.extend(self.tool_entries(slug, tool));
        }

        Sitemap { entries }
    }

    /// Detail and app entries for one tool. The app page's date never
    /// precedes the detail page's.
    fn tool_entries(&self, slug: &str, tool: &ToolRecord) -> [UrlEntry; 2] {
        let mut dir = self.root.join(TOOLS_DIR);
        let mut detail_segments = vec![TOOLS_DIR];
        for segment in slug_segments(slug) {
            dir.push(segment);
            detail_segments.push(segment);
        }
        let mut app_segments = detail_segments.clone();
        detail_segments.push("");
        app_segments.push(TOOL_APP_FILE);

        let detail_lastmod = dates::advance(
            dates::manifest_date(tool, self.today),
            &dir.join(TOOL_DETAIL_FILE),
        );
        let app_lastmod = dates::advance(detail_lastmod, &dir.join(TOOL_APP_FILE));

        [
            UrlEntry {
                loc: self.page_url(&detail_segments),
                lastmod: detail_lastmod,
                changefreq: ChangeFrequency::Monthly,
                priority: Priority::TOOL_DETAIL,
            },
            UrlEntry {
                loc: self.page_url(&app_segments),
                lastmod: app_lastmod,
                changefreq: ChangeFrequency::Monthly,
                priority: Priority::TOOL_APP,
            },
        ]
    }
}

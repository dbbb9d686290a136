//! Shared fixtures for integration tests
#![allow(dead_code)]

use chrono::{Local, NaiveDate, TimeZone};
use std::fs::{self, File};
use std::path::Path;
use std::time::SystemTime;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Create (or truncate) `path` with its modification time at local noon on `day`
pub fn touch(path: &Path, day: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let noon = date(day).and_hms_opt(12, 0, 0).unwrap();
    let when: SystemTime = Local.from_local_datetime(&noon).single().unwrap().into();
    File::create(path).unwrap().set_modified(when).unwrap();
}

pub fn write_manifest(root: &Path, json: &str) {
    fs::write(root.join("index.json"), json).unwrap();
}

/// Contents of `<lastmod>` for the entry whose `<loc>` is `loc`
pub fn lastmod_for(xml: &str, loc: &str) -> Option<String> {
    let needle = format!("<loc>{}</loc>", loc);
    let start = xml.find(&needle)? + needle.len();
    let rest = &xml[start..];
    let open = rest.find("<lastmod>")? + "<lastmod>".len();
    let close = rest.find("</lastmod>")?;
    Some(rest[open..close].to_string())
}

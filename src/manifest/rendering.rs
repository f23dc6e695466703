//! Render the module descriptor document from a scan result.

use std::fmt::Write as _;

use crate::models::{ManifestTemplate, ScanResult};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Render the manifest text.
///
/// Paths are written verbatim; they are assumed not to contain characters that need XML
/// escaping. The property section is omitted entirely when there are no static resources.
pub fn render_manifest(scan: &ScanResult, template: &ManifestTemplate<'_>) -> String {
  let mut out = String::new();

  // writing into a String cannot fail
  let _ = writeln!(out, "{XML_DECLARATION}");
  let _ = writeln!(out, r#"<module rename-to="{}">"#, template.rename_to);
  let _ = writeln!(out, "\t<source path=\"{}\">", template.source_path);
  for entry in &scan.module_sources {
    let _ = writeln!(out, "\t\t<include name=\"{}\"/>", entry.relative_path);
  }
  let _ = writeln!(out, "\t</source>");

  if !scan.static_resources.is_empty() {
    let _ = writeln!(
      out,
      "\t<define-configuration-property name=\"{}\" is-multi-valued=\"true\"/>",
      template.static_property
    );
    for entry in &scan.static_resources {
      let _ = writeln!(
        out,
        "\t<extend-configuration-property name=\"{}\" value=\"{}\"/>",
        template.static_property, entry.relative_path
      );
    }
  }

  out.push_str("</module>\n");
  out
}

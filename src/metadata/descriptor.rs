//! `setup.py` rendering

use crate::request::PackageMetadata;

pub const BUILD_DESCRIPTOR_FILE: &str = "setup.py";

/// Render the setuptools build descriptor.
///
/// Every field goes through [`python_literal_body`], so quotes and line breaks
/// in free-text fields cannot end a literal early.
pub fn render_build_descriptor(metadata: &PackageMetadata) -> String {
    format!(
        "from setuptools import setup, find_packages

setup(
    name='{name}',
    version='{version}',
    description='{description}',
    author='{author}',
    author_email='{author_email}',
    packages=find_packages(),
    install_requires=[],
)
",
        name = python_literal_body(&metadata.name),
        version = python_literal_body(&metadata.version),
        description = python_literal_body(&metadata.description),
        author = python_literal_body(&metadata.author),
        author_email = python_literal_body(&metadata.author_email),
    )
}

/// Escape `value` for use between single quotes in Python source
pub fn python_literal_body(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_ascii_control() => {
                escaped.push_str(&format!("\\x{:02x}", u32::from(c)));
            }
            c => escaped.push(c),
        }
    }
    escaped
}

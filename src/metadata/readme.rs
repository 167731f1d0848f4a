//! `README.md` rendering

pub const README_FILE: &str = "README.md";

/// Render the README: one `# <name>` heading, then prose only
pub fn render_readme(package_name: &str) -> String {
    format!(
        "# {package_name}

This is a Python package generated from a Git repository.

Install it by running `pip install .` from the project root.
"
    )
}

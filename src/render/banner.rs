//! License banner prepended to every bundle.

use crate::domain::PackageMeta;

pub fn render_banner(pkg: &PackageMeta) -> String {
    let author = pkg.author.as_ref().map(ToString::to_string).unwrap_or_default();
    [
        "/*!".to_string(),
        format!(
            " * {} v{} ({})",
            pkg.display_name(),
            pkg.version.as_deref().unwrap_or(""),
            pkg.homepage.as_deref().unwrap_or("")
        ),
        format!(" * Copyright (c) {author}"),
        format!(" * @license {}", pkg.license.as_deref().unwrap_or("")),
        " */".to_string(),
    ]
    .join("\n")
}

//! Content file extensions.

/// Extensions (without the dot) of files that get the content editor
/// instead of the generic file manager.
pub const CONTENT_EXTENSIONS: [&str; 14] = [
    "md", "markdown", "mdown", "mmark", // markdown
    "asciidoc", "adoc", "ad", // asciidoc
    "rst",
    "html", "htm",
    "js",
    "toml", "yaml", "json",
];

/// Returns the extension of the last segment of a URL path.
///
/// This is the text after the final `.` of the segment, so `/a/.md` yields
/// `md` and `/a/file.` yields an empty string. Segments without a dot have
/// no extension.
pub fn extension_of(path: &str) -> Option<&str> {
    let segment = path.rsplit('/').next().unwrap_or(path);
    segment.rfind('.').map(|dot| &segment[dot + 1..])
}

/// Exact, case-sensitive membership test against [`CONTENT_EXTENSIONS`].
pub fn is_content_extension(ext: &str) -> bool {
    CONTENT_EXTENSIONS.contains(&ext)
}

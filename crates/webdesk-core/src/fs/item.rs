//! Item payload types.
//!
//! Every node in the tree is either a file or a directory. The two
//! variants are a closed set — [`ItemKind`] is the only way to construct
//! one, so there is no "abstract item" that could exist at runtime.

/// Coarse media type derived from a file's source metadata.
///
/// A MIME-like string `"type/subtype"` is split on `/`: the first segment
/// becomes the coarse [`kind`](MediaType::kind) and the second the
/// normalised [`subtype`](MediaType::subtype). Missing or malformed values
/// fall back to `"text"` / `"txt"`, and the `"plain"` subtype is
/// normalised to `"txt"` as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    kind: String,
    subtype: String,
}

impl MediaType {
    /// Derives a `MediaType` from a MIME-like source string.
    pub fn parse(source: &str) -> Self {
        let mut parts = source.trim().splitn(2, '/');

        let kind = match parts.next().map(str::trim) {
            Some(k) if !k.is_empty() => k.to_lowercase(),
            _ => "text".to_string(),
        };

        let subtype = match parts.next().map(str::trim) {
            Some(s) if !s.is_empty() && !s.eq_ignore_ascii_case("plain") => s.to_lowercase(),
            _ => "txt".to_string(),
        };

        Self { kind, subtype }
    }

    /// The coarse type tag, e.g. `"text"`, `"audio"`, `"image"`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The normalised subtype, e.g. `"txt"`, `"mpeg"`, `"png"`.
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// The full `"type/subtype"` form.
    pub fn mime(&self) -> String {
        format!("{}/{}", self.kind, self.subtype)
    }
}

impl Default for MediaType {
    fn default() -> Self {
        Self {
            kind: "text".to_string(),
            subtype: "txt".to_string(),
        }
    }
}

/// Payload of a file node: text content plus source-derived media type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileData {
    text: String,
    source: Option<String>,
    media: MediaType,
}

impl FileData {
    /// Creates an empty text file with no source metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a file with the given text content and optional source.
    ///
    /// When `source` is present the media type is derived from it.
    pub fn with_content(text: impl Into<String>, source: Option<&str>) -> Self {
        let mut data = Self {
            text: text.into(),
            ..Self::default()
        };
        if let Some(source) = source {
            data.set_source(source);
        }
        data
    }

    /// The text content of the file.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The opaque source metadata, if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Replaces the source metadata and re-derives the media type from it.
    pub fn set_source(&mut self, source: impl Into<String>) {
        let source = source.into();
        self.media = MediaType::parse(&source);
        self.source = Some(source);
    }

    /// The media type derived from the source metadata.
    pub fn media(&self) -> &MediaType {
        &self.media
    }
}

/// The kind tag of a directory.
///
/// A single variant today; the enum exists so specialised directories
/// (trash, mounts, …) can be added without changing the node layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirectoryKind {
    /// An ordinary directory.
    #[default]
    Default,
}

/// The closed set of item variants stored in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// A leaf item holding text content and media metadata.
    File(FileData),
    /// A container item owning uniquely-named children.
    Directory(DirectoryKind),
}

impl ItemKind {
    /// Returns `true` for the directory variant.
    pub fn is_directory(&self) -> bool {
        matches!(self, ItemKind::Directory(_))
    }

    /// Returns `true` for the file variant.
    pub fn is_file(&self) -> bool {
        matches!(self, ItemKind::File(_))
    }
}

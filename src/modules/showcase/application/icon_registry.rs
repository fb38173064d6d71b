//! Static icon lookup for tech stack entries.
//!
//! The stored `icon_url` is either a known icon identifier or an image
//! URL. Known identifiers resolve through a registry built once at
//! startup; anything URL-shaped becomes an image reference; everything
//! else falls back to the default glyph.

use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_GLYPH: &str = "\u{26a1}"; // ⚡

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    Glyph(&'static str),
    Image(String),
}

fn registry() -> &'static HashMap<&'static str, &'static str> {
    static REGISTRY: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        [
            ("SiReact", "\u{269b}"),
            ("SiRust", "\u{1f980}"),
            ("SiGo", "\u{1f439}"),
            ("SiPython", "\u{1f40d}"),
            ("SiJavascript", "JS"),
            ("SiTypescript", "TS"),
            ("SiNodedotjs", "\u{2b22}"),
            ("SiPostgresql", "\u{1f418}"),
            ("SiRedis", "\u{25c6}"),
            ("SiDocker", "\u{1f433}"),
            ("SiKubernetes", "\u{2388}"),
            ("SiLinux", "\u{1f427}"),
            ("SiGit", "\u{2387}"),
            ("SiNginx", "N"),
            ("FaAws", "\u{2601}"),
            ("FaDatabase", "\u{1f5c4}"),
            ("VscTerminal", "\u{232a}"),
            ("BsGearFill", "\u{2699}"),
        ]
        .into_iter()
        .collect()
    })
}

pub fn resolve_icon(input: &str) -> Icon {
    if input.is_empty() {
        return Icon::Glyph(DEFAULT_GLYPH);
    }

    if let Some(glyph) = registry().get(input) {
        return Icon::Glyph(glyph);
    }

    // Not a known identifier; if it looks like a URL or file, render it as
    // an image.
    if input.contains('/') || input.contains('.') {
        return Icon::Image(input.to_string());
    }

    Icon::Glyph(DEFAULT_GLYPH)
}

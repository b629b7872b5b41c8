//! Static icon dictionary.
//!
//! Maps the catalog's icon keys to inline SVG path data (24x24 viewBox,
//! stroked). Unknown keys fall back to the generic code glyph, so a catalog
//! typo degrades to a sensible icon instead of an empty box.

/// Fallback glyph for unknown keys.
const CODE: &str = "M16 18l6-6-6-6M8 6l-6 6 6 6";

/// SVG path data for a named icon, or the fallback glyph when the key
/// is absent from the dictionary.
pub fn icon_path(name: &str) -> &'static str {
    match name {
        "react" => "M12 10.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3zM21 12c0 2.49-4.03 4.5-9 4.5S3 14.49 3 12s4.03-4.5 9-4.5 9 2.01 9 4.5zM7.5 4.2c2.16-1.24 5.72 1.42 8.2 5.72 2.49 4.3 2.76 8.74.6 9.98-2.16 1.24-5.72-1.42-8.2-5.72-2.49-4.3-2.76-8.74-.6-9.98z",
        "code" => CODE,
        "braces" => "M8 3H7a2 2 0 0 0-2 2v5a2 2 0 0 1-2 2 2 2 0 0 1 2 2v5c0 1.1.9 2 2 2h1M16 21h1a2 2 0 0 0 2-2v-5c0-1.1.9-2 2-2a2 2 0 0 1-2-2V5a2 2 0 0 0-2-2h-1",
        "palette" => "M12 22a10 10 0 1 1 10-10c0 1.66-1.34 3-3 3h-2.5a2.5 2.5 0 0 0-1.77 4.27c.4.4.27 1.77-.73 2.5a10 10 0 0 1-2 .23zM7.5 10.5h.01M12 7h.01M16.5 10.5h.01",
        "wind" => "M9.59 4.59A2 2 0 1 1 11 8H2m10.59 11.41A2 2 0 1 0 14 16H2m15.73-8.27A2.5 2.5 0 1 1 19.5 12H2",
        "triangle" => "M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z",
        "component" => "M12 2l4 4-4 4-4-4 4-4zM18 8l4 4-4 4-4-4 4-4zM6 8l4 4-4 4-4-4 4-4zM12 14l4 4-4 4-4-4 4-4z",
        "server" => "M4 2h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2zM4 14h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2zM6 6h.01M6 18h.01",
        "zap" => "M13 2L3 14h9l-1 8 10-12h-9l1-8z",
        "database" => "M12 8c4.97 0 9-1.34 9-3s-4.03-3-9-3-9 1.34-9 3 4.03 3 9 3zM21 12c0 1.66-4.03 3-9 3s-9-1.34-9-3M3 5v14c0 1.66 4.03 3 9 3s9-1.34 9-3V5",
        "leaf" => "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10zM2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12",
        "plug" => "M12 22v-5M9 8V2M15 8V2M6 8h12l-1 6a5 5 0 0 1-10 0L6 8z",
        "hexagon" => "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
        // The catalog's Python entry keys on "snake"; it renders the
        // workflow glyph.
        "snake" | "workflow" => "M5 3h4a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2zM15 13h4a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2h-4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2zM11 7h2a2 2 0 0 1 2 2v2",
        "git-branch" => "M6 3v12M18 9a3 3 0 1 0 0-6 3 3 0 0 0 0 6zM6 21a3 3 0 1 0 0-6 3 3 0 0 0 0 6zM18 9a9 9 0 0 1-9 9",
        "container" => "M22 7.7l-9.43-5.19a2 2 0 0 0-1.92 0L2 7.7M22 7.7v8.6a2 2 0 0 1-1.04 1.75L12 23 3.04 18.05A2 2 0 0 1 2 16.3V7.7M12 23V12M22 7.7L12 12 2 7.7",
        "cloud" => "M18 10h-1.26A8 8 0 1 0 9 20h9a5 5 0 0 0 0-10z",
        "package" => "M16.5 9.4l-9-5.19M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16zM3.27 6.96L12 12.01l8.73-5.05M12 22.08V12",
        "test-tube" => "M14.5 2v17.5a2.5 2.5 0 0 1-5 0V2M8.5 2h7M14.5 16h-5",
        "figma" => "M8 2h4v8H8a4 4 0 1 1 0-8zM12 2h4a4 4 0 1 1 0 8h-4V2zM12 10h4a4 4 0 1 1-4 4v-4zM8 10h4v8a4 4 0 1 1-4-8z",
        "mail" => "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2zM22 6l-10 7L2 6",
        "linkedin" => "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4V9h4v2.2A6 6 0 0 1 16 8zM6 9H2v12h4zM4 6a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
        "github" => "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22",
        "map-pin" => "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0zM12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
        _ => CODE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        assert_ne!(icon_path("database"), icon_path("cloud"));
        assert_eq!(icon_path("snake"), icon_path("workflow"));
    }

    #[test]
    fn unknown_keys_fall_back_to_the_code_glyph() {
        assert_eq!(icon_path("no-such-icon"), icon_path("code"));
        assert_eq!(icon_path(""), icon_path("code"));
    }

    #[test]
    fn catalog_icons_all_have_glyphs() {
        for skill in folio_content::load_skills().unwrap() {
            assert!(!icon_path(&skill.icon).is_empty());
        }
        for channel in folio_content::contact_channels() {
            // Channel icons are curated; none should hit the fallback.
            assert_ne!(icon_path(channel.icon), CODE, "missing glyph for {}", channel.icon);
        }
    }
}

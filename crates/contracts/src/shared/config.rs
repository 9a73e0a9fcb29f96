use crate::domain::a003_body_snapshot::BodySnapshotLayout;

/// Default layout embedded in the binary
pub const DEFAULT_LAYOUT: &str = r#"
[[photos]]
name = "front"

[[photos]]
name = "side"

[[photos]]
name = "back"

[[measurements]]
label = "Weight"
unit = "kg"

[[measurements]]
label = "Waist"
unit = "cm"

[[measurements]]
label = "Thighs"
unit = "cm"

[[measurements]]
label = "Arms"
unit = "cm"
"#;

/// Parse a layout from TOML and check it.
pub fn parse_layout(contents: &str) -> anyhow::Result<BodySnapshotLayout> {
    let layout: BodySnapshotLayout = toml::from_str(contents)?;
    layout.validate().map_err(anyhow::Error::msg)?;
    Ok(layout)
}

/// Load the snapshot layout
///
/// Order:
/// 1. `override_toml`, if provided (errors are returned, not swallowed)
/// 2. Embedded default layout
pub fn load_layout(override_toml: Option<&str>) -> anyhow::Result<BodySnapshotLayout> {
    match override_toml {
        Some(contents) if !contents.trim().is_empty() => parse_layout(contents),
        _ => parse_layout(DEFAULT_LAYOUT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_loads() {
        let layout = load_layout(None);
        assert!(layout.is_ok());
        assert_eq!(layout.unwrap(), BodySnapshotLayout::default());
    }

    #[test]
    fn test_blank_override_falls_back_to_default() {
        let layout = load_layout(Some("  \n")).unwrap();
        assert_eq!(layout, BodySnapshotLayout::default());
    }

    #[test]
    fn test_override_replaces_default() {
        let layout = load_layout(Some(
            r#"
            [[measurements]]
            label = "Weight"
            unit = "lb"
            "#,
        ))
        .unwrap();
        assert!(layout.photos.is_empty());
        assert_eq!(layout.measurements.len(), 1);
        assert_eq!(layout.measurements[0].unit, "lb");
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        assert!(load_layout(Some("[[photos]]\nname = 5")).is_err());
        assert!(load_layout(Some("[[photos]]\nname = \"front\"\n[[photos]]\nname = \"front\"")).is_err());
        assert!(load_layout(Some(
            "[[measurements]]\nlabel = \"Weight\"\nunit = \"kg\"\n[[measurements]]\nlabel = \"Weight\"\nunit = \"kg\""
        ))
        .is_err());
    }
}

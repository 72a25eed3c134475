//! Cross-field validation over layout shape, layout mode, and shift
//! driver.
//!
//! None of these rules is expressible as a single-field constraint; each
//! is checked independently against the post-default field values (a
//! defaulted field participates exactly as if the user had typed it),
//! and every violated rule is reported.

use crate::models::{LayoutSpec, PanelLayout, RawDisplayConfig, ShiftDriver};

use super::report::{ConfigError, ConfigErrorKind, ValidationReport};

/// Applies layout defaults and enforces the layout/driver invariants.
///
/// Returns the effective `LayoutSpec` on success; on failure the report
/// carries one error per violated rule.
pub fn validate_cross_fields(raw: &RawDisplayConfig) -> Result<LayoutSpec, ValidationReport> {
    let mut report = ValidationReport::new();

    let driver = raw.shift_driver.unwrap_or_default();
    let mode = raw.layout.unwrap_or_default();
    let rows = raw.layout_rows.unwrap_or(1);
    let cols = raw.layout_cols.unwrap_or(1);

    // MBI5124 latches on the inverted clock edge
    if driver == ShiftDriver::Mbi5124 && raw.clock_phase != Some(true) {
        report.add(ConfigError::new(
            ConfigErrorKind::DriverTiming,
            "clock_phase",
            "MBI5124 shift driver requires 'clock_phase: true' to be set",
        ));
    }

    // A single panel cannot have a grid shape
    if rows == 1 && cols == 1 && !mode.is_horizontal() {
        report.add(ConfigError::new(
            ConfigErrorKind::LayoutShape,
            "layout",
            format!(
                "Single panel (layout_rows=1, layout_cols=1) should use 'layout: HORIZONTAL' (got {mode})"
            ),
        ));
    }

    // The horizontal chain is a single row by definition
    if mode.is_horizontal() && rows != 1 {
        report.add(ConfigError::new(
            ConfigErrorKind::LayoutShape,
            "layout_rows",
            format!(
                "HORIZONTAL layout requires 'layout_rows: 1' (got {rows}). \
                 For multi-row grids, use TOP_LEFT_DOWN or another grid layout."
            ),
        ));
    }

    // A non-trivial mode needs a real grid
    if !mode.is_horizontal() && rows == 1 && cols == 1 {
        report.add(ConfigError::new(
            ConfigErrorKind::LayoutShape,
            "layout",
            format!(
                "Grid layout '{mode}' requires multiple panels (layout_rows > 1 or layout_cols > 1)"
            ),
        ));
    }

    // Serpentine wiring physically rotates alternate rows upside down
    if !mode.is_zigzag() && !mode.is_horizontal() && rows == 1 {
        report.add(ConfigError::new(
            ConfigErrorKind::LayoutShape,
            "layout_rows",
            format!(
                "Serpentine layout '{mode}' requires layout_rows > 1 (got layout_rows={rows}). \
                 For single-row chains, use 'layout: HORIZONTAL' or a '_ZIGZAG' variant."
            ),
        ));
    }

    // Zigzag variants need a real grid in both dimensions
    if mode.is_zigzag() && (rows == 1 || cols == 1) {
        report.add(ConfigError::new(
            ConfigErrorKind::LayoutShape,
            "layout",
            format!(
                "ZIGZAG layout '{mode}' requires both layout_rows > 1 AND layout_cols > 1 \
                 (got rows={rows}, cols={cols})"
            ),
        ));
    }

    report.into_result(LayoutSpec {
        rows,
        cols,
        mode,
        rows_explicit: raw.layout_rows.is_some(),
        cols_explicit: raw.layout_cols.is_some(),
        mode_explicit: raw.layout.is_some(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(
        rows: Option<u32>,
        cols: Option<u32>,
        mode: Option<PanelLayout>,
    ) -> RawDisplayConfig {
        RawDisplayConfig {
            panel_width: 64,
            panel_height: 32,
            layout_rows: rows,
            layout_cols: cols,
            layout: mode,
            ..RawDisplayConfig::default()
        }
    }

    fn shape_paths(report: &ValidationReport) -> Vec<&str> {
        report.errors.iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn test_single_panel_horizontal_is_valid() {
        let spec = validate_cross_fields(&config(None, None, None)).unwrap();
        assert_eq!(spec.rows, 1);
        assert_eq!(spec.cols, 1);
        assert!(spec.mode.is_horizontal());
    }

    #[test]
    fn test_defaults_participate_like_explicit_values() {
        // Explicit 1x1 HORIZONTAL and all-defaults validate identically
        // and produce the same effective shape; only the explicitness
        // flags differ
        let explicit = validate_cross_fields(&config(
            Some(1),
            Some(1),
            Some(PanelLayout::Horizontal),
        ))
        .unwrap();
        let defaulted = validate_cross_fields(&config(None, None, None)).unwrap();
        assert_eq!(explicit.rows, defaulted.rows);
        assert_eq!(explicit.cols, defaulted.cols);
        assert_eq!(explicit.mode, defaulted.mode);
        assert!(explicit.rows_explicit);
        assert!(!defaulted.rows_explicit);
    }

    #[test]
    fn test_single_panel_grid_mode_fails() {
        let raw = config(Some(1), Some(1), Some(PanelLayout::TopLeftDown));
        let report = validate_cross_fields(&raw).unwrap_err();
        assert!(report
            .errors
            .iter()
            .all(|e| e.kind == ConfigErrorKind::LayoutShape));
        // 1x1 non-horizontal trips the single-panel rule, the grid rule,
        // and the serpentine rows rule
        assert_eq!(report.errors.len(), 3);
    }

    #[test]
    fn test_horizontal_with_multiple_rows_fails() {
        let raw = config(Some(2), Some(1), Some(PanelLayout::Horizontal));
        let report = validate_cross_fields(&raw).unwrap_err();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(shape_paths(&report), ["layout_rows"]);
    }

    #[test]
    fn test_serpentine_grid_is_valid() {
        let raw = config(Some(2), Some(2), Some(PanelLayout::TopLeftDown));
        let spec = validate_cross_fields(&raw).unwrap();
        assert_eq!(spec.mode, PanelLayout::TopLeftDown);
    }

    #[test]
    fn test_serpentine_single_row_fails() {
        let raw = config(Some(1), Some(2), Some(PanelLayout::TopLeftDown));
        let report = validate_cross_fields(&raw).unwrap_err();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, ConfigErrorKind::LayoutShape);
        assert!(report.errors[0].message.contains("Serpentine"));
    }

    #[test]
    fn test_zigzag_single_column_fails() {
        let raw = config(Some(2), Some(1), Some(PanelLayout::TopLeftDownZigzag));
        let report = validate_cross_fields(&raw).unwrap_err();
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].message.contains("ZIGZAG"));
    }

    #[test]
    fn test_zigzag_grid_is_valid() {
        let raw = config(Some(2), Some(3), Some(PanelLayout::BottomRightUpZigzag));
        assert!(validate_cross_fields(&raw).is_ok());
    }

    #[test]
    fn test_mbi5124_without_clock_phase_fails() {
        let mut raw = config(None, None, None);
        raw.shift_driver = Some(ShiftDriver::Mbi5124);
        let report = validate_cross_fields(&raw).unwrap_err();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, ConfigErrorKind::DriverTiming);
        assert_eq!(report.errors[0].path, "clock_phase");
    }

    #[test]
    fn test_mbi5124_with_clock_phase_false_fails() {
        let mut raw = config(None, None, None);
        raw.shift_driver = Some(ShiftDriver::Mbi5124);
        raw.clock_phase = Some(false);
        assert!(validate_cross_fields(&raw).is_err());
    }

    #[test]
    fn test_mbi5124_with_clock_phase_true_is_valid() {
        let mut raw = config(None, None, None);
        raw.shift_driver = Some(ShiftDriver::Mbi5124);
        raw.clock_phase = Some(true);
        assert!(validate_cross_fields(&raw).is_ok());
    }

    #[test]
    fn test_violations_collected_together() {
        // MBI5124 without clock phase AND an impossible zigzag shape
        let mut raw = config(Some(1), Some(1), Some(PanelLayout::TopLeftDownZigzag));
        raw.shift_driver = Some(ShiftDriver::Mbi5124);
        let report = validate_cross_fields(&raw).unwrap_err();
        assert!(report
            .errors
            .iter()
            .any(|e| e.kind == ConfigErrorKind::DriverTiming));
        assert!(report
            .errors
            .iter()
            .any(|e| e.kind == ConfigErrorKind::LayoutShape));
        // driver + single-panel + grid + zigzag rules all fire
        assert_eq!(report.errors.len(), 4);
    }
}

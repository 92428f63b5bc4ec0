//! Grid layout contract exercised through the public API.

use portal_ui::core::breakpoints::{DESKTOP, PHONE, TABLET};
use portal_ui::core::error::LayoutError;
use portal_ui::core::layout::{
    ColHints, Fraction, GroupHints, RowHints, Tiered, optional_keyword, optional_length, percent,
};
use portal_ui::core::style::{CssKeyword, CssLength};

const SAMPLE_WIDTHS: [u16; 7] = [320, 583, 584, 783, 784, 1023, 1920];

fn length(raw: &str) -> Option<CssLength> {
    optional_length(Some(raw)).unwrap_or_else(|err| panic!("{err}"))
}

fn keyword(raw: &str) -> Option<CssKeyword> {
    optional_keyword(Some(raw)).unwrap_or_else(|err| panic!("{err}"))
}

fn tiers(sm: u32, md: u32, lg: u32) -> Tiered {
    Tiered::new(sm, md, lg).unwrap_or_else(|err| panic!("{err}"))
}

#[test]
fn every_fraction_maps_to_its_twelfth() {
    for columns in 1..=12u8 {
        let expected = f64::from(columns) / 12.0 * 100.0;
        let text = percent(columns);
        let value: f64 = text
            .trim_end_matches('%')
            .parse()
            .unwrap_or_else(|err| panic!("{text}: {err}"));
        assert!((value - expected).abs() < 0.005, "{columns} -> {text}");
    }
    assert_eq!(percent(12), "100%");
}

#[test]
fn zero_fraction_sets_no_width() {
    let hints = ColHints {
        span: tiers(0, 0, 0),
        ..ColHints::default()
    };
    for width in SAMPLE_WIDTHS {
        assert_eq!(hints.resolve().computed_at(width).get("width"), Some("auto"));
    }
}

#[test]
fn out_of_range_fraction_is_rejected() {
    assert_eq!(
        Tiered::new(12, 13, 4),
        Err(LayoutError::FractionOutOfRange { value: 13 })
    );
    assert!(Fraction::new(100).is_err());
}

#[test]
fn large_only_leaves_narrower_tiers_alone() {
    let hints = ColHints {
        span: tiers(0, 0, 5),
        ..ColHints::default()
    };
    let sheet = hints.resolve();
    for width in [320, 600, 900, 1023] {
        let computed = sheet.computed_at(width);
        assert_eq!(computed.get("width"), Some("auto"), "at {width}");
        assert_eq!(computed.get("flex"), Some("1"), "at {width}");
    }
    let desktop = sheet.computed_at(DESKTOP.min_width);
    assert_eq!(desktop.get("width"), Some("41.67%"));
    assert_eq!(desktop.get("flex"), Some("none"));
}

#[test]
fn unset_middle_tier_keeps_narrower_width() {
    let hints = ColHints {
        span: tiers(6, 0, 3),
        ..ColHints::default()
    };
    let sheet = hints.resolve();
    assert_eq!(sheet.computed_at(TABLET.min_width).get("width"), Some("50%"));
    assert_eq!(sheet.computed_at(DESKTOP.min_width).get("width"), Some("25%"));
}

#[test]
fn fixed_width_wins_everywhere() {
    let hints = ColHints {
        span: tiers(12, 6, 4),
        width: length("240px"),
        ..ColHints::default()
    };
    let sheet = hints.resolve();
    for width in SAMPLE_WIDTHS {
        let computed = sheet.computed_at(width);
        assert_eq!(computed.get("width"), Some("240px"), "at {width}");
        assert_eq!(computed.get("flex"), Some("none"), "at {width}");
    }
}

#[test]
fn hide_on_mobile_only_below_phone() {
    let hints = ColHints {
        hide_on_mobile: true,
        flex: true,
        ..ColHints::default()
    };
    let sheet = hints.resolve();
    assert_eq!(sheet.computed_at(0).get("display"), Some("none"));
    assert_eq!(
        sheet.computed_at(PHONE.min_width - 1).get("display"),
        Some("none")
    );
    assert_eq!(
        sheet.computed_at(PHONE.min_width).get("display"),
        Some("flex")
    );
    let css = sheet.render("pl-test");
    assert!(css.contains("display: none !important;"));
}

#[test]
fn visible_everywhere_without_hide_flag() {
    let sheet = ColHints::default().resolve();
    for width in SAMPLE_WIDTHS {
        assert_eq!(sheet.computed_at(width).get("display"), None);
    }
}

#[test]
fn group_center_uses_auto_margins() {
    let hints = GroupHints {
        center: true,
        ..GroupHints::default()
    };
    assert_eq!(hints.resolve().computed_at(800).get("margin"), Some("0 auto"));
}

#[test]
fn group_defaults_to_inline_block() {
    let computed = GroupHints::default().resolve().computed_at(800);
    assert_eq!(computed.get("display"), Some("inline-block"));
    let horizontal = GroupHints {
        horizontal: true,
        ..GroupHints::default()
    };
    assert_eq!(
        horizontal.resolve().computed_at(800).get("display"),
        Some("flex")
    );
}

#[test]
fn column_widths_cascade_end_to_end() {
    let hints = ColHints {
        span: tiers(12, 6, 4),
        ..ColHints::default()
    };
    let sheet = hints.resolve();
    assert_eq!(sheet.computed_at(600).get("width"), Some("100%"));
    assert_eq!(sheet.computed_at(800).get("width"), Some("50%"));
    assert_eq!(sheet.computed_at(1280).get("width"), Some("33.33%"));
}

#[test]
fn row_bleed_margin_end_to_end() {
    let hints = RowHints {
        margin: length("1rem"),
        ..RowHints::default()
    };
    let computed = hints.resolve().computed_at(800);
    assert_eq!(computed.get("margin-left"), Some("-1rem"));
    assert_eq!(computed.get("margin-right"), Some("-1rem"));
    assert_eq!(computed.get("width"), Some("calc(100% + 1rem + 1rem)"));
}

#[test]
fn rendered_css_scopes_media_rules() {
    let hints = ColHints {
        span: tiers(12, 6, 4),
        hide_on_mobile: true,
        ..ColHints::default()
    };
    let sheet = hints.resolve();
    let class_name = sheet.class_name("pl");
    let css = sheet.render(&class_name);
    assert!(css.starts_with(&format!(".{class_name} {{ flex: 1; width: auto; padding: 0; }}")));
    assert!(css.contains(&format!(
        "@media screen and (min-width: 784px) {{ .{class_name} {{ width: 50%; flex: none; }} }}"
    )));
    assert_eq!(css.matches("@media").count(), 4);
}

#[test]
fn row_overrides_replace_defaults() {
    let hints = RowHints {
        max_height: length("50vh"),
        overflow_y: keyword("scroll"),
        justify_content: keyword("center"),
        ..RowHints::default()
    };
    let sheet = hints.resolve();
    for width in SAMPLE_WIDTHS {
        let computed = sheet.computed_at(width);
        assert_eq!(computed.get("max-height"), Some("50vh"), "at {width}");
        assert_eq!(computed.get("overflow-y"), Some("scroll"), "at {width}");
        assert_eq!(computed.get("justify-content"), Some("center"), "at {width}");
    }
    assert!(sheet.render("pl-row").contains(
        "max-height: 50vh; overflow-y: scroll; justify-content: center;"
    ));
}

#[test]
fn col_box_declarations_pass_through() {
    let hints = ColHints {
        height: length("12rem"),
        overflow_x: keyword("auto"),
        overflow_y: keyword("hidden"),
        flex: true,
        align_items: keyword("center"),
        ..ColHints::default()
    };
    let sheet = hints.resolve();
    for width in SAMPLE_WIDTHS {
        let computed = sheet.computed_at(width);
        assert_eq!(computed.get("height"), Some("12rem"), "at {width}");
        assert_eq!(computed.get("overflow-x"), Some("auto"), "at {width}");
        assert_eq!(computed.get("overflow-y"), Some("hidden"), "at {width}");
        assert_eq!(computed.get("align-items"), Some("center"), "at {width}");
    }
    assert!(sheet.media_blocks().is_empty());
}

#[test]
fn fixed_height_yields_to_full_height_on_desktop() {
    let hints = ColHints {
        height: length("12rem"),
        full_height: true,
        ..ColHints::default()
    };
    let sheet = hints.resolve();
    assert_eq!(sheet.computed_at(TABLET.min_width).get("height"), Some("12rem"));
    assert_eq!(
        sheet.computed_at(DESKTOP.min_width).get("height"),
        Some("calc(100vh - 4rem)")
    );
}

#[test]
fn offsets_still_apply_with_fixed_width() {
    let hints = ColHints {
        span: tiers(12, 6, 4),
        offset: tiers(0, 2, 3),
        width: length("200px"),
        ..ColHints::default()
    };
    let sheet = hints.resolve();
    let phone = sheet.computed_at(PHONE.min_width);
    assert_eq!(phone.get("width"), Some("200px"));
    assert_eq!(phone.get("margin-left"), None);
    let tablet = sheet.computed_at(800);
    assert_eq!(tablet.get("width"), Some("200px"));
    assert_eq!(tablet.get("margin-left"), Some("16.67%"));
    let desktop = sheet.computed_at(1280);
    assert_eq!(desktop.get("width"), Some("200px"));
    assert_eq!(desktop.get("margin-left"), Some("25%"));
}

//! Process-wide global theme, exercised in its own test binary so no other
//! test observes it.

use std::sync::{Mutex, OnceLock};

use plotspec::plot::theme::{clear_global_theme, global_theme, set_global_theme};
use plotspec::prelude::*;
use plotspec::{FeatureKind, PlotSpecError};
use serde_json::json;

fn lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

#[test]
fn test_ggplot_picks_up_global_theme() {
    let _guard = lock();
    set_global_theme(theme_classic()).unwrap();

    let p = ggplot();
    assert_eq!(p.theme(), Some(&json!({"name": "classic"})));
    assert_eq!(Settings::current().theme(), Some(&theme_classic()));

    clear_global_theme();
    assert_eq!(ggplot().theme(), None);
    assert!(global_theme().is_none());
}

#[test]
fn test_gggrid_strips_global_theme_from_children() {
    let _guard = lock();
    set_global_theme(theme_bw()).unwrap();

    let a = ggplot() + geom_point().mapping(aes().x("x").y("y")).build().unwrap();
    let b = ggplot() + theme_minimal();
    let grid = gggrid(vec![Some(a.into()), Some(b.into())], None, GridOptions::default());
    clear_global_theme();

    let dict = grid.unwrap().as_dict();
    assert_eq!(dict["theme"], json!({"name": "bw"}));
    assert!(dict["figures"][0].get("theme").is_none());
    assert_eq!(dict["figures"][1]["theme"], json!({"name": "minimal"}));
}

#[test]
fn test_options_global_theme_merges_with_local_options() {
    let _guard = lock();
    let global = theme()
        .legend_position(LegendPosition::Bottom)
        .build()
        .unwrap();
    set_global_theme(global).unwrap();

    let p = ggplot() + theme().axis_title(element_blank()).build().unwrap();
    clear_global_theme();

    assert_eq!(
        p.theme(),
        Some(&json!({"legend_position": "bottom", "axis_title": {"blank": true}}))
    );
}

#[test]
fn test_only_themes_can_be_global() {
    let _guard = lock();
    let err = set_global_theme(ggsize(100.0, 100.0).unwrap()).unwrap_err();
    assert!(matches!(err, PlotSpecError::ValidationError(_)));
    assert!(global_theme().is_none());
    assert_eq!(theme_bw().kind(), FeatureKind::Theme);
}

//! End-to-end composition of plots and grids

use plotspec::prelude::*;
use plotspec::writer::{JsonWriter, Writer};
use plotspec::SubPlotsSpec;
use serde_json::{json, Value};
use std::io::Write;

fn base_plot() -> PlotSpec {
    let data = json!({
        "x": [1, 2, 3, 4],
        "y": [3.0, 1.5, 2.0, 4.5],
        "g": ["a", "b", "a", "b"]
    });
    Settings::new()
        .ggplot()
        .data(data)
        .unwrap()
        .mapping(aes().x("x").y("y"))
}

#[test]
fn test_full_plot_dict() {
    let p = base_plot()
        + geom_bar()
            .mapping(aes().fill("g"))
            .stat(StatKind::Identity)
            .position(position_dodge().width(0.8).build().unwrap())
            .build()
            .unwrap()
        + geom_text()
            .mapping(aes().label("g"))
            .position(position_nudge().y(0.2).build().unwrap())
            .build()
            .unwrap()
        + scale_fill_manual(&["#1b9e77", "#d95f02"]).build().unwrap()
        + coord_flip().build().unwrap()
        + facet_wrap(&["g"]).ncol(2).build().unwrap()
        + ggsize(600.0, 400.0).unwrap()
        + ggtitle("Totals", Some("by group"));

    let dict = p.as_dict();
    assert_eq!(dict["kind"], json!("plot"));
    assert_eq!(dict["layers"][0]["position"], json!({"name": "dodge", "width": 0.8}));
    assert_eq!(dict["layers"][0]["stat"], json!("identity"));
    assert_eq!(dict["layers"][1]["position"], json!({"name": "nudge", "y": 0.2}));
    assert_eq!(dict["scales"][0]["aesthetic"], json!("fill"));
    assert_eq!(dict["coord"], json!({"name": "flip"}));
    assert_eq!(dict["facet"], json!({"name": "wrap", "facets": "g", "ncol": 2}));
    assert_eq!(dict["ggtitle"], json!({"text": "Totals", "subtitle": "by group"}));
    assert!(p.validate().is_ok());
}

#[test]
fn test_stacked_layers() {
    let p = base_plot()
        + geom_area()
            .mapping(aes().fill("g"))
            .position(position_stack().vjust(0.5).mode(StackMode::All).build().unwrap())
            .build()
            .unwrap()
        + geom_bar().position(PositionKind::Fill).build().unwrap();

    assert_eq!(
        p.layers()[0].get("position"),
        Some(&json!({"name": "stack", "vjust": 0.5, "mode": "all"}))
    );
    assert_eq!(p.layers()[1].get("position"), Some(&json!("fill")));
}

#[test]
fn test_grid_of_grids_serializes() {
    let inner = Settings::new()
        .gggrid(
            vec![Some(base_plot().into()), None],
            None,
            GridOptions::default().sharey("row".parse::<Share>().unwrap()),
        )
        .unwrap();
    let outer = Settings::new()
        .gggrid(
            vec![
                Some(inner.into()),
                Some((base_plot() + geom_line().build().unwrap()).into()),
                Some((base_plot() + geom_point().build().unwrap()).into()),
            ],
            Some(2),
            GridOptions::default().vspace(8.0).align(true),
        )
        .unwrap();
    let outer = (outer + ggsize(800.0, 600.0).unwrap()).unwrap();

    let text = JsonWriter::new().write(&outer.clone().into()).unwrap();
    let parsed: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed["layout"], json!({"name": "grid", "ncol": 2, "nrow": 2, "vspace": 8.0, "align": true}));
    assert_eq!(parsed["figures"][0]["kind"], json!("subplots"));
    assert_eq!(parsed["figures"][0]["layout"]["sharey"], json!("row"));
    assert_eq!(parsed["figures"][3], Value::Null);
    assert_eq!(parsed["ggsize"], json!({"width": 800.0, "height": 600.0}));

    // The serialized figure reads back to the same specification
    let reparsed = Figure::from_value(parsed).unwrap();
    assert_eq!(reparsed.as_dict(), outer.as_dict());
}

#[test]
fn test_figure_loaded_from_file() {
    let p = base_plot() + geom_point().build().unwrap() + theme_light();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", p.as_dict()).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    let figure = Figure::from_value(serde_json::from_str(&text).unwrap()).unwrap();
    match figure {
        Figure::Plot(loaded) => {
            assert_eq!(loaded, PlotSpec::from_value(p.as_dict()).unwrap());
            assert_eq!(loaded.theme(), Some(&json!({"name": "light"})));
        }
        Figure::SubPlots(_) => panic!("expected a plot"),
    }
}

#[test]
fn test_subplots_reject_plot_features() {
    let grid: SubPlotsSpec = Settings::new()
        .gggrid(vec![Some(base_plot().into())], None, GridOptions::default())
        .unwrap();
    assert!((grid.clone() + coord_flip().build().unwrap()).is_err());
    assert!((grid + theme_void()).is_ok());
}

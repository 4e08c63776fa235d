// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON snapshots of measured rows and draw lists.
//!
//! [`row_to_json`] describes a [`MeasuredRow`]: its size and every badge with
//! its resolved geometry. [`draw_list_to_json`] describes a [`DrawList`], one
//! object per recorded op. [`export`] paints a row into a fresh draw list and
//! writes both snapshots as one JSON document.

use std::io::{self, Write};

use kurbo::{Affine, RoundedRect, Size};
use peniko::Color;
use refbadge_core::layout::{BadgeItem, MeasuredRow};
use refbadge_core::style::{FontSpec, FontWeight};
use refbadge_render::{DrawList, RecordedOp, StateOp};
use serde_json::{Value, json};

/// Describes a measured row.
#[must_use]
pub fn row_to_json(row: &MeasuredRow) -> Value {
    json!({
        "size": size(row.size),
        "foreground": color(row.foreground),
        "badges": row.items.iter().map(badge).collect::<Vec<_>>(),
    })
}

/// Describes a recorded draw list, in issue order.
#[must_use]
pub fn draw_list_to_json(list: &DrawList) -> Value {
    Value::Array(list.ops().iter().map(op).collect())
}

/// Paints `row` into a fresh [`DrawList`] and writes the row and its draw
/// list as a single pretty-printed JSON object.
pub fn export(row: &MeasuredRow, writer: &mut dyn Write) -> io::Result<()> {
    let mut list = DrawList::new();
    refbadge_render::paint(&mut list, row);
    let doc = json!({
        "row": row_to_json(row),
        "draws": draw_list_to_json(&list),
    });
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}

fn badge(item: &BadgeItem) -> Value {
    json!({
        "label": item.label.text,
        "head": item.is_head,
        "width": item.width,
        "fill": color(item.fill),
        "font": font(&item.label.font),
        "label_size": size(item.label.size),
        "icon_transform": affine(item.icon.transform),
    })
}

fn op(op: &RecordedOp) -> Value {
    match op {
        RecordedOp::State(StateOp::PushOpacity(opacity)) => json!({
            "op": "push_opacity",
            "opacity": opacity,
        }),
        RecordedOp::State(StateOp::PushTransform(transform)) => json!({
            "op": "push_transform",
            "transform": affine(*transform),
        }),
        RecordedOp::State(StateOp::Pop) => json!({ "op": "pop" }),
        RecordedOp::FillRoundedRect { shape, color: c } => json!({
            "op": "fill_rounded_rect",
            "shape": rounded_rect(shape),
            "color": color(*c),
        }),
        RecordedOp::StrokeRoundedRect {
            shape,
            color: c,
            width,
        } => json!({
            "op": "stroke_rounded_rect",
            "shape": rounded_rect(shape),
            "color": color(*c),
            "width": width,
        }),
        RecordedOp::Line {
            line,
            color: c,
            width,
        } => json!({
            "op": "line",
            "from": [line.p0.x, line.p0.y],
            "to": [line.p1.x, line.p1.y],
            "color": color(*c),
            "width": width,
        }),
        RecordedOp::Text { run, origin } => json!({
            "op": "text",
            "text": run.text,
            "origin": [origin.x, origin.y],
            "font": font(&run.font),
            "color": color(run.color),
        }),
        RecordedOp::FillPath {
            path,
            transform,
            color: c,
        } => json!({
            "op": "fill_path",
            "path": path.to_svg(),
            "transform": affine(*transform),
            "color": color(*c),
        }),
    }
}

fn size(s: Size) -> Value {
    json!([s.width, s.height])
}

fn color(c: Color) -> Value {
    json!(c.components)
}

fn affine(a: Affine) -> Value {
    json!(a.as_coeffs())
}

fn rounded_rect(r: &RoundedRect) -> Value {
    let rect = r.rect();
    let radii = r.radii();
    json!({
        "rect": [rect.x0, rect.y0, rect.x1, rect.y1],
        "radii": [radii.top_left, radii.top_right, radii.bottom_right, radii.bottom_left],
    })
}

fn font(f: &FontSpec) -> Value {
    json!({
        "family": f.family,
        "weight": match f.weight {
            FontWeight::Regular => "regular",
            FontWeight::Bold => "bold",
        },
        "size": f.size,
    })
}

#[cfg(test)]
mod tests {
    use refbadge_core::decoration::{Decoration, DecorationKind};
    use refbadge_core::icon::IconSet;
    use refbadge_core::layout::measure;
    use refbadge_core::style::BadgeStyle;
    use refbadge_core::text::TextMeasurer;

    use super::*;

    struct FixedMeasurer;

    impl TextMeasurer for FixedMeasurer {
        fn measure(&self, text: &str, _font: &FontSpec) -> Size {
            match text {
                "main" => Size::new(30.0, 12.0),
                "v1.0" => Size::new(25.0, 12.0),
                _ => Size::new(0.0, 12.0),
            }
        }
    }

    fn main_and_tag() -> MeasuredRow {
        let red = Color::from_rgb8(0xd0, 0x40, 0x40);
        measure(
            &[
                Decoration::new(DecorationKind::CurrentBranchHead, "main", red),
                Decoration::new(DecorationKind::Tag, "v1.0", red),
            ],
            &BadgeStyle::default(),
            &IconSet::builtin(),
            &FixedMeasurer,
        )
    }

    #[test]
    fn row_snapshot_lists_badges_in_order() {
        let value = row_to_json(&main_and_tag());
        assert_eq!(value["size"], json!([109.0, 16.0]));
        let badges = value["badges"].as_array().unwrap();
        assert_eq!(badges.len(), 2);
        assert_eq!(badges[0]["label"], "main");
        assert_eq!(badges[0]["head"], true);
        assert_eq!(badges[0]["width"], 50.0);
        assert_eq!(badges[0]["font"]["weight"], "bold");
        assert_eq!(badges[1]["label"], "v1.0");
        assert_eq!(badges[1]["head"], false);
        assert_eq!(badges[1]["width"], 49.0);
        assert_eq!(badges[1]["font"]["weight"], "regular");
    }

    #[test]
    fn empty_row_snapshot() {
        let value = row_to_json(&MeasuredRow::empty(Color::WHITE));
        assert_eq!(value["size"], json!([0.0, 0.0]));
        assert!(value["badges"].as_array().unwrap().is_empty());
    }

    #[test]
    fn draw_list_snapshot_names_every_op() {
        let mut list = DrawList::new();
        refbadge_render::paint(&mut list, &main_and_tag());
        let value = draw_list_to_json(&list);
        let names: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|op| op["op"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            [
                "push_opacity",
                "fill_rounded_rect",
                "pop",
                "text",
                "stroke_rounded_rect",
                "push_transform",
                "fill_path",
                "pop",
                "push_opacity",
                "fill_rounded_rect",
                "pop",
                "line",
                "text",
                "stroke_rounded_rect",
                "push_transform",
                "fill_path",
                "pop",
            ]
        );
        assert_eq!(value[11]["from"], json!([71.0, 0.0]));
        assert_eq!(value[9]["shape"]["radii"], json!([0.0, 2.0, 2.0, 0.0]));

        // Outlines and dividers use the badge fill; tags fill with the tag
        // background.
        let red = Color::from_rgb8(0xd0, 0x40, 0x40);
        assert_eq!(value[4]["color"], json!(red.components));
        assert_eq!(value[11]["color"], json!(Color::WHITE.components));
        assert_eq!(value[13]["color"], json!(Color::WHITE.components));
    }

    #[test]
    fn export_produces_valid_json() {
        let mut out = Vec::new();
        export(&main_and_tag(), &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["row"]["badges"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["draws"].as_array().unwrap().len(), 17);
    }
}

// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Yard snapshot.
//!
//! Loads the reference yard from `demos/data/yard.json`, drops containers reported
//! outside the yard polygon, groups the rest into stacks, and prints each stack with
//! its marker bounds and color tier. Finishes with a zoom and a simulated click.
//!
//! Run:
//! - `cargo run -p yardmap_demos --example yard_snapshot`
//! - `RUST_LOG=trace cargo run -p yardmap_demos --example yard_snapshot` to also see
//!   skipped containers and grouping summaries.

use anyhow::Context;
use kurbo::{Point, Size};
use serde::Deserialize;
use yardmap_geo::{GeoPoint, ReferenceFrame};
use yardmap_stack::{GroupingConfig, PositionedEntity, Rotation};
use yardmap_view::{MarkerStyle, Occupancy, Viewport, grid_lines};

#[derive(Debug, Deserialize)]
struct YardFile {
    frame: ReferenceFrame,
    #[serde(default)]
    grouping: GroupingConfig,
    containers: Vec<Report>,
}

#[derive(Clone, Debug, Deserialize)]
struct Report {
    number: String,
    agent: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    rotation: Rotation,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/yard.json");
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let yard: YardFile = serde_json::from_str(&text).context("parsing yard description")?;
    let frame = &yard.frame;

    println!(
        "== Yard: {} x {} px, {} boundary points ==",
        frame.canvas_size().width,
        frame.canvas_size().height,
        frame.boundary().map_or(0, |b| b.points().len())
    );
    println!("grid lines: {}", grid_lines(frame.canvas_size(), 100.0).len());

    let mut entities = Vec::new();
    for report in &yard.containers {
        let geo = GeoPoint::new(report.latitude, report.longitude);
        if !frame.contains(geo) {
            log::warn!("skipping {} at {geo:?}: outside the yard", report.number);
            continue;
        }
        entities.push(PositionedEntity::place(
            report.clone(),
            geo,
            report.rotation,
            frame.transform(),
        ));
    }

    let stacks = yard.grouping.group(&entities)?;
    let style = MarkerStyle::default();
    println!("== {} stacks from {} containers ==", stacks.len(), entities.len());
    for (i, stack) in stacks.iter().enumerate() {
        let tier = Occupancy::of(stack);
        let numbers: Vec<String> = stack
            .members
            .iter()
            .map(|m| format!("{} ({})", m.payload().number, m.payload().agent))
            .collect();
        println!(
            "  #{i} at ({:.1}, {:.1}) {:?} {:?} rgb{:?} bounds={:?}",
            stack.position.x,
            stack.position.y,
            stack.rotation,
            tier,
            tier.rgb(),
            style.bounds(stack.position, stack.rotation),
        );
        println!("     {}", numbers.join(", "));
    }

    let Some(first) = stacks.first() else {
        return Ok(());
    };
    let stage = Size::new(900.0, 600.0);
    let mut view = Viewport::default();
    view.zoom_in();
    view.zoom_in();
    view.center_on(first.position, stage);
    println!(
        "== Centered on #0 at scale {:.2}, offset {:?} ==",
        view.scale(),
        view.offset()
    );

    let click = Point::new(stage.width / 2.0 + 10.0, stage.height / 2.0);
    let canvas = view.screen_to_canvas(click);
    match style.hit_test(&stacks, canvas) {
        Some(i) => println!("click at {click:?} selects stack #{i}"),
        None => println!("click at {click:?} hits nothing"),
    }
    Ok(())
}

// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zone stacks and search.
//!
//! Places containers into named zones, groups them one stack per zone with levels
//! sorted bottom-up, then looks up a container by number or shipping agent and
//! centers the viewport on the stack holding it.
//!
//! Run:
//! - `cargo run -p yardmap_demos --example stack_search -- --agent maersk`
//! - `cargo run -p yardmap_demos --example stack_search -- --number tclu1112223`

use anyhow::bail;
use kurbo::Size;
use yardmap_geo::{GeoPoint, ReferenceFrame, ZoneFootprint};
use yardmap_stack::search::matching_members;
use yardmap_stack::{
    ContainerRecord, PositionedEntity, Rotation, SearchError, StackMember, StackQuery,
    find_group, group_by_partition,
};
use yardmap_view::Viewport;

#[derive(Clone, Debug)]
struct Slot {
    number: &'static str,
    agent: &'static str,
    zone: String,
    level: u32,
}

impl ContainerRecord for Slot {
    fn container_number(&self) -> &str {
        self.number
    }

    fn shipping_agent(&self) -> &str {
        self.agent
    }
}

impl StackMember for Slot {
    type Key = String;

    fn partition_key(&self) -> String {
        self.zone.clone()
    }

    fn rank(&self) -> u32 {
        self.level
    }
}

fn zone(id: &str, lat: f64, lon: f64) -> ZoneFootprint {
    let d = 0.0004;
    ZoneFootprint::new(
        id,
        format!("Block {id}"),
        GeoPoint::new(lat, lon),
        GeoPoint::new(lat, lon + d),
        GeoPoint::new(lat - d, lon + d),
        GeoPoint::new(lat - d, lon),
    )
}

fn parse_query(mut args: impl Iterator<Item = String>) -> anyhow::Result<StackQuery> {
    let mut query = StackQuery::default();
    while let Some(flag) = args.next() {
        let Some(value) = args.next() else {
            bail!("missing value for {flag}");
        };
        query = match flag.as_str() {
            "--number" => query.with_container_number(value),
            "--agent" => query.with_shipping_agent(value),
            other => bail!("unknown flag {other}, expected --number or --agent"),
        };
    }
    Ok(query)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let frame = ReferenceFrame::new(
        GeoPoint::new(-6.2000, 106.8000),
        GeoPoint::new(-6.2100, 106.8100),
        1200.0,
        800.0,
    )?;
    let zones = [
        zone("A1", -6.2020, 106.8010),
        zone("A2", -6.2020, 106.8020),
        zone("B1", -6.2060, 106.8070),
    ];
    let slots = [
        ("MSCU1234567", "MSC", "A1", 2),
        ("MSCU7654321", "MSC", "A1", 1),
        ("TCLU1112223", "Hapag-Lloyd", "A2", 1),
        ("MAEU7778889", "Maersk Line", "B1", 3),
        ("CSNU4445556", "COSCO Shipping", "B1", 1),
        ("CMAU3334445", "CMA CGM", "B1", 2),
    ];

    let mut entities = Vec::new();
    for (number, agent, zone_id, level) in slots {
        let Some(z) = zones.iter().find(|z| z.id == zone_id) else {
            bail!("container {number} references unknown zone {zone_id}");
        };
        let slot = Slot {
            number,
            agent,
            zone: z.id.clone(),
            level,
        };
        entities.push(PositionedEntity::place(
            slot,
            z.center(),
            Rotation::Deg0,
            frame.transform(),
        ));
    }

    let stacks = group_by_partition(&entities);
    println!("== {} zone stacks ==", stacks.len());
    for stack in &stacks {
        let levels: Vec<String> = stack
            .members
            .iter()
            .map(|m| format!("L{} {}", m.payload().level, m.payload().number))
            .collect();
        println!(
            "  {} at ({:.1}, {:.1}): {}",
            stack.key,
            stack.position.x,
            stack.position.y,
            levels.join(" / ")
        );
    }

    let query = parse_query(std::env::args().skip(1))?;
    let found = match find_group(&stacks, &query) {
        Ok(found) => found,
        Err(SearchError::EmptyQuery) => {
            println!("nothing to search for; pass --number or --agent");
            return Ok(());
        }
    };
    let Some(index) = found else {
        println!("no container matches {query:?}");
        return Ok(());
    };

    let stack = &stacks[index];
    let matcher = query.compile()?;
    for m in matching_members(stack, &matcher) {
        println!(
            "found {} ({}) in zone {} at level {}",
            m.payload().number,
            m.payload().agent,
            stack.key,
            m.payload().level
        );
    }

    let mut view = Viewport::default();
    view.center_on(stack.position, Size::new(900.0, 600.0));
    println!("viewport offset {:?}", view.offset());
    Ok(())
}

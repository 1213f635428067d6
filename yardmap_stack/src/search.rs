// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locate the stack holding a container.
//!
//! ## Matching rules
//!
//! - Criteria are trimmed; blank criteria are ignored.
//! - Container number: case-insensitive exact match.
//! - Shipping agent: case-insensitive substring match.
//! - With both criteria, a single container must satisfy both.
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use yardmap_geo::GeoPoint;
//! use yardmap_stack::search::{ContainerRecord, StackQuery, find_group};
//! use yardmap_stack::{PositionedEntity, Rotation, group_by_proximity};
//!
//! #[derive(Clone)]
//! struct Box2 { number: &'static str, agent: &'static str }
//!
//! impl ContainerRecord for Box2 {
//!     fn container_number(&self) -> &str { self.number }
//!     fn shipping_agent(&self) -> &str { self.agent }
//! }
//!
//! let at = |number, agent, x| PositionedEntity::new(
//!     Box2 { number, agent }, GeoPoint::default(), Point::new(x, 0.0), Rotation::Deg0,
//! );
//! let entities = [at("MSCU1234567", "MSC", 0.0), at("TEMU7654321", "Maersk Line", 200.0)];
//! let groups = group_by_proximity(&entities, 35.0).unwrap();
//!
//! let query = StackQuery::default().with_shipping_agent("maersk");
//! assert_eq!(find_group(&groups, &query), Ok(Some(1)));
//! ```

use alloc::string::String;

use crate::error::SearchError;
use crate::types::{Group, PositionedEntity};

/// Fields a payload exposes to stack search.
pub trait ContainerRecord {
    /// Container number, for example `MSCU12345678`.
    fn container_number(&self) -> &str;

    /// Shipping agent name.
    fn shipping_agent(&self) -> &str;
}

/// Raw search criteria as typed by a user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackQuery {
    /// Exact container number, compared case-insensitively.
    pub container_number: Option<String>,
    /// Shipping agent substring, compared case-insensitively.
    pub shipping_agent: Option<String>,
}

impl StackQuery {
    /// Set the container number criterion.
    pub fn with_container_number(mut self, number: impl Into<String>) -> Self {
        self.container_number = Some(number.into());
        self
    }

    /// Set the shipping agent criterion.
    pub fn with_shipping_agent(mut self, agent: impl Into<String>) -> Self {
        self.shipping_agent = Some(agent.into());
        self
    }

    /// Normalize the criteria into a matcher.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyQuery`] when both criteria are blank.
    pub fn compile(&self) -> Result<StackMatcher, SearchError> {
        let normalize = |s: &Option<String>| {
            s.as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_lowercase)
        };
        let number = normalize(&self.container_number);
        let agent = normalize(&self.shipping_agent);
        if number.is_none() && agent.is_none() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(StackMatcher { number, agent })
    }
}

/// Normalized, non-empty search criteria.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackMatcher {
    number: Option<String>,
    agent: Option<String>,
}

impl StackMatcher {
    /// Whether a single record satisfies every criterion.
    pub fn matches<R: ContainerRecord + ?Sized>(&self, record: &R) -> bool {
        let number_ok = self
            .number
            .as_ref()
            .is_none_or(|n| record.container_number().to_lowercase() == *n);
        let agent_ok = self
            .agent
            .as_ref()
            .is_none_or(|a| record.shipping_agent().to_lowercase().contains(a.as_str()));
        number_ok && agent_ok
    }
}

/// Index of the first group holding a matching container.
///
/// # Errors
///
/// Returns [`SearchError::EmptyQuery`] when both criteria are blank.
pub fn find_group<P: ContainerRecord, K>(
    groups: &[Group<P, K>],
    query: &StackQuery,
) -> Result<Option<usize>, SearchError> {
    let matcher = query.compile()?;
    let found = groups
        .iter()
        .position(|g| g.members.iter().any(|m| matcher.matches(m.payload())));
    log::debug!("stack search over {} groups: {found:?}", groups.len());
    Ok(found)
}

/// Members of `group` that satisfy `matcher`, in member order.
pub fn matching_members<'a, P: ContainerRecord, K>(
    group: &'a Group<P, K>,
    matcher: &'a StackMatcher,
) -> impl Iterator<Item = &'a PositionedEntity<P>> + 'a {
    group
        .members
        .iter()
        .filter(move |m| matcher.matches(m.payload()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rotation;
    use alloc::vec::Vec;
    use kurbo::Point;
    use yardmap_geo::GeoPoint;

    struct Record {
        number: &'static str,
        agent: &'static str,
    }

    impl ContainerRecord for Record {
        fn container_number(&self) -> &str {
            self.number
        }

        fn shipping_agent(&self) -> &str {
            self.agent
        }
    }

    fn group(key: usize, records: Vec<Record>) -> Group<Record, usize> {
        let members = records
            .into_iter()
            .map(|r| PositionedEntity::new(r, GeoPoint::default(), Point::ORIGIN, Rotation::Deg0))
            .collect();
        Group {
            key,
            members,
            position: Point::ORIGIN,
            rotation: Rotation::Deg0,
        }
    }

    fn yard() -> Vec<Group<Record, usize>> {
        alloc::vec![
            group(
                0,
                alloc::vec![
                    Record { number: "MSCU12345671", agent: "MSC" },
                    Record { number: "TCLU76543210", agent: "Hapag-Lloyd" },
                ],
            ),
            group(1, alloc::vec![Record { number: "CSNU11112222", agent: "Maersk Line" }]),
            group(2, alloc::vec![Record { number: "HLXU99990000", agent: "CMA CGM" }]),
        ]
    }

    #[test]
    fn blank_query_is_an_error() {
        let groups = yard();
        assert_eq!(find_group(&groups, &StackQuery::default()), Err(SearchError::EmptyQuery));
        let spaces = StackQuery::default()
            .with_container_number("   ")
            .with_shipping_agent("\t");
        assert_eq!(find_group(&groups, &spaces), Err(SearchError::EmptyQuery));
    }

    #[test]
    fn container_number_is_exact_and_case_insensitive() {
        let groups = yard();
        let q = StackQuery::default().with_container_number("  csnu11112222 ");
        assert_eq!(find_group(&groups, &q), Ok(Some(1)));
        let partial = StackQuery::default().with_container_number("CSNU1111");
        assert_eq!(find_group(&groups, &partial), Ok(None));
    }

    #[test]
    fn agent_is_substring() {
        let groups = yard();
        let q = StackQuery::default().with_shipping_agent("lloyd");
        assert_eq!(find_group(&groups, &q), Ok(Some(0)));
        let q = StackQuery::default().with_shipping_agent("Evergreen");
        assert_eq!(find_group(&groups, &q), Ok(None));
    }

    #[test]
    fn both_criteria_must_hold_on_one_container() {
        let groups = yard();
        // Number from one container, agent from its neighbor in the same stack.
        let q = StackQuery::default()
            .with_container_number("MSCU12345671")
            .with_shipping_agent("hapag");
        assert_eq!(find_group(&groups, &q), Ok(None));
        let q = StackQuery::default()
            .with_container_number("MSCU12345671")
            .with_shipping_agent("ms");
        assert_eq!(find_group(&groups, &q), Ok(Some(0)));
    }

    #[test]
    fn matching_members_filters_within_group() {
        let groups = yard();
        let matcher = StackQuery::default().with_shipping_agent("l").compile().unwrap();
        let hits: Vec<_> = matching_members(&groups[0], &matcher)
            .map(|m| m.payload().number)
            .collect();
        assert_eq!(hits, ["TCLU76543210"]);
    }
}

use crate::neighbors::Connectivity;

/// When a search accepts the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GoalAcceptance {
    /// Return as soon as the goal shows up as a neighbor of the expanded cell.
    #[default]
    OnDiscovery,
    /// Enqueue the goal like any other cell and return when it is popped as
    /// the frontier minimum.
    OnExpansion,
}

/// What happens to cells the current search already expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClosedCells {
    /// Expanded cells are never considered again.
    #[default]
    NeverReopen,
    /// An expanded cell reached again with a strictly lower `f` goes back
    /// into the frontier.
    ///
    /// Step costs and the heuristic are both Manhattan distances, so the
    /// heuristic is consistent and an expanded cell is never reached again
    /// with a lower `f`. With the built-in costs this setting changes neither
    /// the outcome nor the observed events.
    Reopen,
}

/// How blocked start or goal cells are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EndpointPolicy {
    /// Fail with [`SearchError::BlockedEndpoint`](crate::SearchError::BlockedEndpoint).
    #[default]
    Reject,
    /// Set both endpoints to open before searching.
    ForceOpen,
}

/// Search configuration. The default reproduces the classic behavior:
/// 8-way moves, goal accepted on discovery, closed cells never reopened and
/// blocked endpoints rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub connectivity: Connectivity,
    pub goal_acceptance: GoalAcceptance,
    pub closed_cells: ClosedCells,
    pub endpoints: EndpointPolicy,
}

impl SearchConfig {
    /// Default configuration with the given connectivity.
    pub fn new(connectivity: Connectivity) -> Self {
        Self {
            connectivity,
            ..Self::default()
        }
    }

    /// Replace the neighbor connectivity.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Replace the goal acceptance policy.
    pub fn with_goal_acceptance(mut self, goal_acceptance: GoalAcceptance) -> Self {
        self.goal_acceptance = goal_acceptance;
        self
    }

    /// Replace the closed-cell policy.
    pub fn with_closed_cells(mut self, closed_cells: ClosedCells) -> Self {
        self.closed_cells = closed_cells;
        self
    }

    /// Replace the blocked-endpoint policy.
    pub fn with_endpoints(mut self, endpoints: EndpointPolicy) -> Self {
        self.endpoints = endpoints;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_override_defaults() {
        let cfg = SearchConfig::new(Connectivity::Four)
            .with_goal_acceptance(GoalAcceptance::OnExpansion)
            .with_closed_cells(ClosedCells::Reopen)
            .with_endpoints(EndpointPolicy::ForceOpen);
        assert_eq!(cfg.connectivity, Connectivity::Four);
        assert_eq!(cfg.goal_acceptance, GoalAcceptance::OnExpansion);
        assert_eq!(cfg.closed_cells, ClosedCells::Reopen);
        assert_eq!(cfg.endpoints, EndpointPolicy::ForceOpen);
        assert_eq!(
            cfg.with_connectivity(Connectivity::Eight).connectivity,
            Connectivity::Eight
        );
    }

    #[test]
    fn default_is_classic_behavior() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.connectivity, Connectivity::Eight);
        assert_eq!(cfg.goal_acceptance, GoalAcceptance::OnDiscovery);
        assert_eq!(cfg.closed_cells, ClosedCells::NeverReopen);
        assert_eq!(cfg.endpoints, EndpointPolicy::Reject);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig::new(Connectivity::Four).with_closed_cells(ClosedCells::Reopen);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: SearchConfig =
            serde_json::from_str(r#"{"connectivity":"four","endpoints":"force_open"}"#).unwrap();
        assert_eq!(cfg.connectivity, Connectivity::Four);
        assert_eq!(cfg.endpoints, EndpointPolicy::ForceOpen);
        assert_eq!(cfg.goal_acceptance, GoalAcceptance::OnDiscovery);
    }
}

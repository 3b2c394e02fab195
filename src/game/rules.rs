use serde::{Deserialize, Serialize};

/// Scoring table and lose policy. Lives in the `[rules]` section of the
/// configuration file; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    #[serde(default = "default_tool_points")]
    pub tool_points: u32,
    #[serde(default = "default_repair_points")]
    pub repair_points: u32,
    #[serde(default = "default_crystal_points")]
    pub crystal_points: u32,
    /// Completion bonus granted by a successful `win`.
    #[serde(default = "default_win_bonus")]
    pub win_bonus: u32,
    /// End the session in failure once this many hazards have been taken.
    /// `None` disables the lose condition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hazard_limit: Option<u32>,
}

fn default_tool_points() -> u32 {
    10
}

fn default_repair_points() -> u32 {
    20
}

fn default_crystal_points() -> u32 {
    50
}

fn default_win_bonus() -> u32 {
    30
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            tool_points: default_tool_points(),
            repair_points: default_repair_points(),
            crystal_points: default_crystal_points(),
            win_bonus: default_win_bonus(),
            hazard_limit: None,
        }
    }
}

impl Rules {
    /// Whether `hazard_count` hazards end the session under this rule set.
    pub fn hazards_exhausted(&self, hazard_count: u32) -> bool {
        self.hazard_limit
            .map_or(false, |limit| limit > 0 && hazard_count >= limit)
    }

    /// Highest score a flawless run can reach.
    pub fn max_score(&self) -> u32 {
        [self.repair_points, self.crystal_points, self.win_bonus]
            .iter()
            .fold(self.tool_points, |acc, &p| acc.saturating_add(p))
    }
}

//! Viewer identity, server policy, and the per-frame input bundle.
//!
//! Everything the recompute engine would otherwise pull from ambient session
//! state is passed in explicitly through [`FrameInput`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;

use serde::{Deserialize, Serialize};

use crate::camera::RenderSurface;
use crate::consts::{ENV_INDIVIDUAL_VIEWS, ENV_PERSONAL_SERVER};
use crate::error::ConfigError;
use crate::zone::Token;

/// Role of a viewer, or of the view being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Player,
    Gm,
}

impl Role {
    #[must_use]
    pub fn is_gm(self) -> bool {
        matches!(self, Self::Gm)
    }
}

/// The connected player the zone is being rendered for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub name: String,
    pub role: Role,
}

impl Viewer {
    #[must_use]
    pub fn player(name: impl Into<String>) -> Self {
        Self { name: name.into(), role: Role::Player }
    }

    #[must_use]
    pub fn gm(name: impl Into<String>) -> Self {
        Self { name: name.into(), role: Role::Gm }
    }

    /// Whether this viewer owns `token` in the view being rendered.
    ///
    /// A GM view owns every token. Anywhere else, including a GM previewing
    /// the player view, only listed owners and owned-by-all tokens count.
    #[must_use]
    pub fn owns(&self, token: &Token, gm_view: bool) -> bool {
        gm_view || token.is_owned_by(&self.name)
    }
}

/// Server-side policy flags that shape the player view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewPolicy {
    /// Each player sees only through the tokens they own.
    pub individual_views: bool,
    /// Single-player session; behaves like individual views.
    pub personal_server: bool,
}

impl ViewPolicy {
    /// Read the policy from environment variables.
    ///
    /// Optional:
    /// - `ZONE_VIEW_INDIVIDUAL_VIEWS`: boolean, default false
    /// - `ZONE_VIEW_PERSONAL_SERVER`: boolean, default false
    ///
    /// # Errors
    ///
    /// Returns `InvalidFlag` when a variable is set to something that is not
    /// a recognised boolean, including values that are not valid Unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self { individual_views: env_flag(ENV_INDIVIDUAL_VIEWS)?, personal_server: env_flag(ENV_PERSONAL_SERVER)? })
    }

    /// Read the policy through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ViewPolicy::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            individual_views: parse_flag(ENV_INDIVIDUAL_VIEWS, lookup(ENV_INDIVIDUAL_VIEWS).as_deref())?,
            personal_server: parse_flag(ENV_PERSONAL_SERVER, lookup(ENV_PERSONAL_SERVER).as_deref())?,
        })
    }

    /// Whether sight comes only from the viewer's own tokens.
    #[must_use]
    pub fn per_player_sight(&self) -> bool {
        self.individual_views || self.personal_server
    }
}

fn env_flag(var: &str) -> Result<bool, ConfigError> {
    parse_flag(var, env_value(var, std::env::var(var))?.as_deref())
}

/// Unset is `None`; a value that is not Unicode is rejected.
fn env_value(var: &str, read: Result<String, VarError>) -> Result<Option<String>, ConfigError> {
    match read {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => {
            Err(ConfigError::InvalidFlag { var: var.to_owned(), value: raw.to_string_lossy().into_owned() })
        }
    }
}

fn parse_flag(var: &str, raw: Option<&str>) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        _ => Err(ConfigError::InvalidFlag { var: var.to_owned(), value: raw.to_owned() }),
    }
}

/// Everything one recompute cycle needs besides the zone and selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameInput {
    pub viewer: Viewer,
    pub policy: ViewPolicy,
    /// Role the renderer is drawing as. A GM may preview the player view.
    pub view_role: Role,
    /// Let the selection narrow which tokens provide sight.
    pub use_selection: bool,
    /// Active render surface, if any.
    pub surface: Option<RenderSurface>,
}

impl FrameInput {
    /// Input for `viewer` drawing as their own role, with default policy,
    /// selection-driven sight, and no surface.
    #[must_use]
    pub fn new(viewer: Viewer) -> Self {
        let view_role = viewer.role;
        Self { viewer, policy: ViewPolicy::default(), view_role, use_selection: true, surface: None }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ViewPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_view_role(mut self, role: Role) -> Self {
        self.view_role = role;
        self
    }

    #[must_use]
    pub fn with_use_selection(mut self, use_selection: bool) -> Self {
        self.use_selection = use_selection;
        self
    }

    #[must_use]
    pub fn with_surface(mut self, surface: RenderSurface) -> Self {
        self.surface = Some(surface);
        self
    }

    /// GM views bypass visibility and ownership filtering.
    #[must_use]
    pub fn is_gm_view(&self) -> bool {
        self.view_role.is_gm()
    }
}

//! Demo configuration from environment variables.
//!
//! | Variable          | Field                         | Default        |
//! |-------------------|-------------------------------|----------------|
//! | `VILLAGE_SEED`    | `compare.seed`                | 42             |
//! | `VILLAGE_TASKS`   | `compare.task_count`          | 100            |
//! | `VILLAGE_PARCELS` | `compare.parcel_count`        | 5              |
//! | `VILLAGE_LIMIT`   | `compare.turn_limit`          | unset          |
//! | `VILLAGE_ROBOT_A` | `robot_a`                     | smart          |
//! | `VILLAGE_ROBOT_B` | `robot_b`                     | goal           |

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use rv_behavior::RobotKind;
use rv_core::CompareConfig;

pub struct DemoConfig {
    pub compare: CompareConfig,
    pub robot_a: RobotKind,
    pub robot_b: RobotKind,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = CompareConfig::default();
        let compare = CompareConfig {
            seed:         var_or("VILLAGE_SEED", defaults.seed)?,
            task_count:   var_or("VILLAGE_TASKS", defaults.task_count)?,
            parcel_count: var_or("VILLAGE_PARCELS", defaults.parcel_count)?,
            turn_limit:   var_opt("VILLAGE_LIMIT")?,
            ..defaults
        };
        compare.validate()?;

        Ok(Self {
            compare,
            robot_a: var_or("VILLAGE_ROBOT_A", RobotKind::Smart)?,
            robot_b: var_or("VILLAGE_ROBOT_B", RobotKind::Goal)?,
        })
    }
}

fn var_opt<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .with_context(|| format!("{name}={raw:?} is not valid")),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("reading {name}")),
    }
}

fn var_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(var_opt(name)?.unwrap_or(default))
}

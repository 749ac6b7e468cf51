//! Tab map listing

use rolefolio_engine::{default_tab, tabs_for};
use rolefolio_types::{RoleKey, TabId};
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliResult;
use crate::output::{self, OutputFormat};

#[derive(Debug, Serialize)]
pub struct RoleTabs {
    pub role: RoleKey,
    pub default_tab: TabId,
    pub tabs: &'static [TabId],
}

/// Table row for tab map display
#[derive(Debug, Serialize, Tabled)]
struct TabRow {
    role: String,
    default: String,
    tabs: String,
}

impl From<&RoleTabs> for TabRow {
    fn from(entry: &RoleTabs) -> Self {
        let tabs: Vec<&str> = entry.tabs.iter().map(|tab| tab.as_str()).collect();
        Self {
            role: entry.role.to_string(),
            default: entry.default_tab.to_string(),
            tabs: tabs.join(", "),
        }
    }
}

pub fn tab_map() -> Vec<RoleTabs> {
    RoleKey::ALL
        .into_iter()
        .map(|role| RoleTabs {
            role,
            default_tab: default_tab(role),
            tabs: tabs_for(role),
        })
        .collect()
}

/// Execute tabs command
pub fn execute(format: OutputFormat) -> CliResult<()> {
    let map = tab_map();
    if output::print_structured(&map, format)? {
        return Ok(());
    }

    output::print_table(map.iter().map(TabRow::from).collect());
    Ok(())
}

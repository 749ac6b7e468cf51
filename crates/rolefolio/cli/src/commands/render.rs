//! Render a profile page from fixtures

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use colored::Colorize;
use rolefolio_engine::{
    load_identity, MemoryAnalyticsSink, PageOutcome, PageView, ProfilePage, RejectReason,
    SelectionOutcome, StaticIdentityProvider,
};
use rolefolio_types::{LensConfig, ProfileStore, RoleKey, SessionUser, TabId, ViewEvent};
use serde::Serialize;
use tabled::Tabled;

use crate::config::load_document;
use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat};

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Profile store fixture (JSON or YAML)
    #[arg(short, long)]
    pub store: PathBuf,

    /// Subject username from the route; omit to exercise the redirects
    #[arg(short, long)]
    pub username: Option<String>,

    /// Session fixture for the viewer; omit to view anonymously
    #[arg(long)]
    pub viewer: Option<PathBuf>,

    /// Role to click after the page settles
    #[arg(short, long)]
    pub role: Option<RoleKey>,

    /// Tab to click after the page settles
    #[arg(short, long)]
    pub tab: Option<TabId>,
}

/// A settled page plus the analytics it produced.
pub struct RenderedPage {
    pub page: ProfilePage,
    pub events: Arc<MemoryAnalyticsSink>,
}

#[derive(Serialize)]
struct RenderReport<'a> {
    page: PageOutcome<'a>,
    tracked_views: Vec<ViewEvent>,
}

/// Mount a page, settle identity, and apply the requested clicks.
pub async fn settle_page(args: &RenderArgs, config: &LensConfig) -> CliResult<RenderedPage> {
    let store: ProfileStore = load_document(&args.store)?;
    let session: Option<SessionUser> = args
        .viewer
        .as_deref()
        .map(load_document::<SessionUser>)
        .transpose()?;

    let events = Arc::new(MemoryAnalyticsSink::new());
    let mut page = ProfilePage::mount(config, events.clone());
    let ticket = page.navigate(args.username.as_deref(), Arc::new(store));
    let viewer = load_identity(&StaticIdentityProvider::new(session)).await;
    page.identity_settled(ticket, viewer);
    page.evaluate()?;

    if let Some(role) = args.role {
        check_click(page.select_role(role))?;
        page.evaluate()?;
    }
    if let Some(tab) = args.tab {
        check_click(page.select_tab(tab))?;
        page.evaluate()?;
    }

    Ok(RenderedPage { page, events })
}

fn check_click(outcome: SelectionOutcome) -> CliResult<()> {
    let SelectionOutcome::Rejected(reason) = outcome else {
        return Ok(());
    };
    let message = match reason {
        RejectReason::NotReady => "the page has no role to select from".to_string(),
        RejectReason::RoleNotVisible(role) => format!("role {role} is not visible to this viewer"),
        RejectReason::TabNotInRole { role, tab } => {
            format!("tab {tab} is not offered for role {role}")
        }
    };
    Err(CliError::InvalidArgument(message))
}

/// Execute render command
pub async fn execute(args: RenderArgs, config: &LensConfig, format: OutputFormat) -> CliResult<()> {
    let RenderedPage { mut page, events } = settle_page(&args, config).await?;
    let report = RenderReport {
        page: page.evaluate()?,
        tracked_views: events.events(),
    };

    if output::print_structured(&report, format)? {
        return Ok(());
    }

    match &report.page {
        PageOutcome::Pending => output::print_warning("Viewer identity has not settled"),
        PageOutcome::Redirect(intent) => {
            output::print_heading("Redirect");
            output::print_field("intent", serde_json::to_string(intent)?);
        }
        PageOutcome::NotFound { username } => {
            output::print_warning(&format!("Profile {username} not found"));
        }
        PageOutcome::Ready(view) => print_view(view)?,
    }
    if !report.tracked_views.is_empty() {
        println!();
        println!("{}", "Tracked views".bold());
        output::print_table(report.tracked_views.iter().map(ViewRow::from).collect());
    }
    Ok(())
}

/// Table row for tracked view display
#[derive(Debug, Serialize, Tabled)]
struct ViewRow {
    username: String,
    role: String,
    viewer: String,
    timestamp: String,
}

impl From<&ViewEvent> for ViewRow {
    fn from(event: &ViewEvent) -> Self {
        Self {
            username: event.username.clone(),
            role: event.role.to_string(),
            viewer: event.viewer_type.to_string(),
            timestamp: event.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

fn print_view(view: &PageView<'_>) -> CliResult<()> {
    output::print_heading(&format!("Profile: {}", view.username));
    output::print_field("viewer", view.relation);

    let roles: Vec<String> = view
        .visible_roles
        .as_slice()
        .iter()
        .map(|role| marked(role.as_str(), *role == view.active_role))
        .collect();
    output::print_field("roles", roles.join("  "));

    let tabs: Vec<String> = view
        .tabs
        .iter()
        .map(|tab| marked(tab.as_str(), *tab == view.active_tab))
        .collect();
    output::print_field("tabs", tabs.join("  "));

    println!();
    println!("{}", "Section".bold());
    println!("{}", serde_json::to_string_pretty(&view.section)?);

    println!();
    println!("{}", "Metadata".bold());
    output::print_field("title", &view.metadata.title);
    output::print_field("description", &view.metadata.description);
    output::print_field("keywords", &view.metadata.keywords);
    output::print_field("canonical", &view.metadata.canonical_url);
    if let Some(image) = &view.metadata.image_url {
        output::print_field("image", image);
    }
    Ok(())
}

fn marked(label: &str, active: bool) -> String {
    if active {
        format!("[{label}]").green().bold().to_string()
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolefolio_types::ViewerRelation;
    use std::io::Write;

    fn fixture(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    fn args(store: &tempfile::NamedTempFile) -> RenderArgs {
        RenderArgs {
            store: store.path().to_path_buf(),
            username: Some("ada".into()),
            viewer: None,
            role: None,
            tab: None,
        }
    }

    const STORE: &str = r#"{
        "role_profiles": [
            {"role": "FREELANCER", "is_public": false},
            {"role": "CLIENT", "is_public": true}
        ]
    }"#;

    #[tokio::test]
    async fn rejected_click_is_an_invalid_argument() {
        let store = fixture(STORE, ".json");
        let mut args = args(&store);
        args.role = Some(RoleKey::Freelancer);

        let err = settle_page(&args, &LensConfig::default()).await.err().unwrap();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn tab_click_moves_the_section() {
        let store = fixture(STORE, ".json");
        let mut args = args(&store);
        args.tab = Some(TabId::Projects);

        let RenderedPage { mut page, events } =
            settle_page(&args, &LensConfig::default()).await.unwrap();
        match page.evaluate().unwrap() {
            PageOutcome::Ready(view) => assert_eq!(view.section.tab(), TabId::Projects),
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(events.events().len(), 1);
    }

    #[test]
    fn tracked_views_render_as_table_rows() {
        let event = ViewEvent::new("ada", RoleKey::Client, ViewerRelation::SelfView);
        let row = ViewRow::from(&event);
        assert_eq!(row.role, "CLIENT");
        assert_eq!(row.viewer, "self");

        let rendered = tabled::Table::new(vec![row]).to_string();
        assert!(rendered.contains("username"));
        assert!(rendered.contains("ada"));
    }

    #[test]
    fn report_tags_the_outcome() {
        let report = RenderReport {
            page: PageOutcome::NotFound { username: "ada" },
            tracked_views: Vec::new(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["page"]["outcome"], "not_found");
        assert_eq!(json["page"]["username"], "ada");
    }
}

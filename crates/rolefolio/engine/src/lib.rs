//! # rolefolio-engine
//!
//! Decides what a public profile page shows for a given viewer:
//!
//! 1. [`VisibilityResolver`] picks the roles the viewer may see
//! 2. [`SelectionController`] keeps the active role and tab consistent with them
//! 3. [`SectionDispatcher`] turns the selection into a section descriptor
//! 4. [`MetadataProjector`] derives title, description, keywords and JSON-LD
//! 5. [`ViewTracker`] emits one analytics event per viewed role
//!
//! [`ProfilePage`] drives the whole pipeline for one mounted page and guards
//! against identity resolutions that finish after the route has moved on.

#![deny(unsafe_code)]

pub mod dispatch;
pub mod metadata;
pub mod navigation;
pub mod page;
pub mod ports;
pub mod selection;
pub mod structured_data;
pub mod tabs;
pub mod tracker;
pub mod visibility;

pub use dispatch::{Detail, Listing, SectionDescriptor, SectionDispatcher};
pub use metadata::{
    role_synonyms, EnglishRoleLabels, MetadataInputs, MetadataProjector, MetadataSubject,
    ProjectionKey, RoleLabels,
};
pub use navigation::NavigationIntent;
pub use page::{load_identity, IdentityTicket, PageOutcome, PageView, ProfilePage, SettleOutcome};
pub use ports::{
    AnalyticsError, AnalyticsSink, ChannelAnalyticsSink, FailingAnalyticsSink, HeadRenderer,
    IdentityError, IdentityProvider, MemoryAnalyticsSink, MemoryHeadRenderer, Navigator,
    RecordingNavigator, StaticIdentityProvider,
};
pub use selection::{RejectReason, SelectionController, SelectionOutcome, SelectionState};
pub use structured_data::{job_title, OrganizationSchema, PersonSchema, PostalAddressSchema};
pub use tabs::{default_tab, role_has_tab, tabs_for};
pub use tracker::ViewTracker;
pub use visibility::{VisibilityResolver, VisibleRoleSet};

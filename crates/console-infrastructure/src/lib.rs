//! # Console Infrastructure
//! 
//! Remote API implementations (adapters) of the console-core repository ports.

pub mod remote;

pub use remote::{
    RemoteApiClient, RemoteDashboardTemplateRepository, RemoteMenuTemplateRepository,
    RemoteStudyRepository, RemoteWidgetCatalog,
};

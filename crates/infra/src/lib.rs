mod config;
mod nag_registry;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use nag_registry::{NagRegistry, NagTokens};
pub use repos::{
    FileAgendaRepo, FileTodoRepo, IAgendaRepo, ITodoRepo, InMemoryAgendaRepo, InMemoryTodoRepo,
    Repos,
};
pub use services::*;
pub use system::{FakeSys, ISys, RealSys};

use std::sync::Arc;

/// Everything a use case needs, constructed once per process and passed
/// by reference. The nag registry and scheduler live here so that use
/// cases, subscribers and spawned loop bodies all share the same
/// instances.
#[derive(Clone)]
pub struct Context {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotifier>,
    pub scheduler: Arc<dyn IJobScheduler>,
    pub nags: Arc<NagRegistry>,
}

/// Will setup the infrastructure context given the environment.
/// The returned receiver is the firing end of the deferred-job
/// scheduler; the application must consume it.
pub fn setup_context() -> (Context, JobReceiver) {
    let config = Config::new();
    let sys: Arc<dyn ISys> = Arc::new(RealSys {});
    let (scheduler, job_rx) = TokioJobScheduler::new(sys.clone());
    let notifier = WebhookNotifier::new(
        config.owner_webhook_url.clone(),
        config.broadcast_webhook_url.clone(),
        config.webhook_key.clone(),
    );
    let context = Context {
        repos: Repos::create_file_backed(&config.data_dir),
        config,
        sys,
        notifier: Arc::new(notifier),
        scheduler: Arc::new(scheduler),
        nags: Arc::new(NagRegistry::new()),
    };
    (context, job_rx)
}

/// Context against in-memory stores and the recording stub notifier.
/// Tests swap individual fields (clock, notifier) for their own
/// instances when they need to inspect or steer them.
pub fn setup_context_inmemory() -> (Context, JobReceiver) {
    let config = Config::new();
    let sys: Arc<dyn ISys> = Arc::new(RealSys {});
    let (scheduler, job_rx) = TokioJobScheduler::new(sys.clone());
    let context = Context {
        repos: Repos::create_inmemory(),
        config,
        sys,
        notifier: Arc::new(StubNotifier::new()),
        scheduler: Arc::new(scheduler),
        nags: Arc::new(NagRegistry::new()),
    };
    (context, job_rx)
}

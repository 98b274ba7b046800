//! State

use std::{path::PathBuf, sync::Arc};

use kiosk_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Where uploaded images are written
    pub(crate) uploads_dir: PathBuf,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, uploads_dir: PathBuf) -> Self {
        Self { app, uploads_dir }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, uploads_dir: PathBuf) -> Arc<Self> {
        Arc::new(Self::new(app, uploads_dir))
    }
}
